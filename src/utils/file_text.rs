// \u{FEFF}
pub const BOM_BYTES: &[u8] = &[0xEF, 0xBB, 0xBF];

pub fn strip_bom(bytes: &[u8]) -> &[u8] {
  if bytes.starts_with(BOM_BYTES) {
    &bytes[BOM_BYTES.len()..]
  } else {
    bytes
  }
}
