pub mod volume_statter;

pub use volume_statter::VolumeStatter;
