//! Swedish collation for display names.
//!
//! Names are compared level by level: base letters first (case and accents
//! ignored, `å ä ö` after `z`), then accents, then case. Lowercase sorts before
//! uppercase, and a final code point comparison keeps the ordering total.
//!
//! Input is brought to NFC first so precomposed and decomposed spellings of
//! the same name compare equal on every level but the last.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const CLASS_SYMBOL: u32 = 0;
const CLASS_DIGIT: u32 = 1;
const CLASS_LETTER: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Weight {
	primary: u32,
	secondary: u32,
	tertiary: u8,
}

const fn letter(base: char) -> u32 {
	(CLASS_LETTER << 24) | base as u32
}

const fn after_z(offset: u32) -> u32 {
	(CLASS_LETTER << 24) | ('z' as u32 + offset)
}

fn base_weight(c: char) -> u32 {
	if c.is_alphabetic() {
		letter(c)
	} else if c.is_ascii_digit() {
		(CLASS_DIGIT << 24) | c as u32
	} else {
		(CLASS_SYMBOL << 24) | c as u32
	}
}

/// Letters that are not plain base + accent in Swedish, or that carry no
/// canonical decomposition. Secondary ranks stay below the combining mark
/// range used for decomposed accents.
fn tailored(c: char) -> Option<&'static [(u32, u32)]> {
	const A_RING: &[(u32, u32)] = &[(after_z(1), 0)];
	const A_DIAERESIS: &[(u32, u32)] = &[(after_z(2), 0)];
	const AE: &[(u32, u32)] = &[(after_z(2), 1)];
	const O_DIAERESIS: &[(u32, u32)] = &[(after_z(3), 0)];
	const O_STROKE: &[(u32, u32)] = &[(after_z(3), 1)];
	const U_DIAERESIS: &[(u32, u32)] = &[(letter('y'), 1)];
	const L_STROKE: &[(u32, u32)] = &[(letter('l'), 1)];
	const D_STROKE: &[(u32, u32)] = &[(letter('d'), 1)];
	const ETH: &[(u32, u32)] = &[(letter('d'), 2)];
	const H_STROKE: &[(u32, u32)] = &[(letter('h'), 1)];
	const T_STROKE: &[(u32, u32)] = &[(letter('t'), 1)];
	const DOTLESS_I: &[(u32, u32)] = &[(letter('i'), 1)];
	const OE: &[(u32, u32)] = &[(letter('o'), 1), (letter('e'), 1)];
	const SHARP_S: &[(u32, u32)] = &[(letter('s'), 1), (letter('s'), 1)];
	const THORN: &[(u32, u32)] = &[(letter('t'), 2), (letter('h'), 2)];

	Some(match c {
		'å' => A_RING,
		'ä' => A_DIAERESIS,
		'æ' => AE,
		'ö' => O_DIAERESIS,
		'ø' => O_STROKE,
		// ü is a variant of y in Swedish
		'ü' => U_DIAERESIS,
		'ł' => L_STROKE,
		'đ' => D_STROKE,
		'ð' => ETH,
		'ħ' => H_STROKE,
		'ŧ' => T_STROKE,
		'ı' => DOTLESS_I,
		'œ' => OE,
		'ß' => SHARP_S,
		'þ' => THORN,
		_ => return None,
	})
}

/// Secondary rank of a combining mark. Always above the tailored ranks.
fn accent_rank(mark: char) -> u32 {
	0x100 + mark as u32
}

fn weights(s: &str) -> Vec<Weight> {
	let mut out: Vec<Weight> = Vec::with_capacity(s.len());
	for c in s.nfc() {
		let lower = c.to_lowercase().next().unwrap_or(c);
		let tertiary = u8::from(lower != c);

		if is_combining_mark(c) {
			// A mark NFC could not compose only refines the previous letter.
			match out.last_mut() {
				Some(prev) => prev.secondary = prev.secondary.saturating_add(accent_rank(c)),
				None => out.push(Weight {
					primary: base_weight(c),
					secondary: 0,
					tertiary,
				}),
			}
			continue;
		}

		if let Some(parts) = tailored(lower) {
			out.extend(parts.iter().map(|&(primary, secondary)| Weight {
				primary,
				secondary,
				tertiary,
			}));
			continue;
		}

		let mut decomposed = std::iter::once(lower).nfd();
		let base = decomposed.next().unwrap_or(lower);
		let secondary = decomposed
			.filter(|m| is_combining_mark(*m))
			.fold(0u32, |acc, m| acc.saturating_mul(0x400).saturating_add(accent_rank(m)));
		out.push(Weight {
			primary: base_weight(base),
			secondary,
			tertiary,
		});
	}
	out
}

fn compare_level<T: Ord>(a: &[Weight], b: &[Weight], key: impl Fn(&Weight) -> T) -> Ordering {
	a.iter().map(&key).cmp(b.iter().map(&key))
}

/// Compares two strings the way a Swedish reader expects them ordered.
pub fn compare(a: &str, b: &str) -> Ordering {
	let (wa, wb) = (weights(a), weights(b));
	compare_level(&wa, &wb, |w| w.primary)
		.then_with(|| compare_level(&wa, &wb, |w| w.secondary))
		.then_with(|| compare_level(&wa, &wb, |w| w.tertiary))
		.then_with(|| a.nfc().cmp(b.nfc()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sorted(words: &[&str]) -> Vec<String> {
		let mut v: Vec<String> = words.iter().map(|s| s.to_string()).collect();
		v.sort_by(|a, b| compare(a, b));
		v
	}

	#[test]
	fn swedish_letters_after_z() {
		assert_eq!(
			sorted(&["Öst", "Zebra", "Ägg", "Ålder", "Apa"]),
			["Apa", "Zebra", "Ålder", "Ägg", "Öst"]
		);
	}

	#[test]
	fn case_is_ignored_before_later_letters() {
		assert_eq!(sorted(&["beta", "Alfa", "alfa2"]), ["Alfa", "alfa2", "beta"]);
	}

	#[test]
	fn lowercase_before_uppercase_on_tie() {
		assert_eq!(compare("ekonomi", "Ekonomi"), Ordering::Less);
	}

	#[test]
	fn accents_only_break_ties() {
		assert_eq!(sorted(&["resume", "résumé", "resumes"]), ["resume", "résumé", "resumes"]);
	}

	#[test]
	fn digits_before_letters() {
		assert_eq!(sorted(&["abc", "123"]), ["123", "abc"]);
	}

	#[test]
	fn network_before_security() {
		assert_eq!(compare("Nätverk", "Säkerhet"), Ordering::Less);
	}

	#[test]
	fn equal_strings_compare_equal() {
		assert_eq!(compare("Loggar", "Loggar"), Ordering::Equal);
	}

	#[test]
	fn accented_letters_outside_latin1_fold_to_their_base() {
		assert_eq!(compare("Čapek", "Dator"), Ordering::Less);
		assert_eq!(compare("Šifrering", "Tele"), Ordering::Less);
		assert_eq!(compare("Łódź", "Malmö"), Ordering::Less);
		assert_eq!(compare("Đakovo", "Eskilstuna"), Ordering::Less);
		assert_eq!(sorted(&["Översikt", "Šifrering", "Tele"]), ["Šifrering", "Tele", "Översikt"]);
	}

	#[test]
	fn oe_ligature_expands() {
		assert_eq!(sorted(&["oeuvre", "œuvre", "ofta", "odla"]), ["odla", "oeuvre", "œuvre", "ofta"]);
	}

	#[test]
	fn decomposed_input_matches_precomposed() {
		let nfd = "re\u{0301}sume\u{0301}";
		assert_eq!(compare(nfd, "résumé"), Ordering::Equal);
		assert_eq!(compare(nfd, "rea"), compare("résumé", "rea"));
		assert_eq!(compare("a\u{030A}lder", "zebra"), Ordering::Greater);
	}
}
