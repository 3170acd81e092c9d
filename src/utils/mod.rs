mod fs;
mod hash;

pub use fs::{collect_patches, is_patch_file, patched_rom_name};
pub use hash::{FileDigest, digest_file};
