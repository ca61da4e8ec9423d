//! Category color assignment.

/// Observable 10 categorical scheme. Shared by every legend and flow stroke.
pub const PALETTE: &[&str] = &[
	"#4269d0", "#efb118", "#ff725c", "#6cc5b0", "#3ca951", "#ff8ab7", "#a463f2", "#97bbf5",
	"#9c6b4e", "#9498a0",
];

const FNV1A32_OFFSET: u32 = 0x811c_9dc5;
const FNV1A32_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `s`.
pub fn hash_string(s: &str) -> u32 {
	s.bytes().fold(FNV1A32_OFFSET, |hash, byte| {
		(hash ^ byte as u32).wrapping_mul(FNV1A32_PRIME)
	})
}

/// Palette color for a category id. Different ids may share a color.
pub fn color_for_category(id: &str) -> &'static str {
	PALETTE[hash_string(id) as usize % PALETTE.len()]
}
