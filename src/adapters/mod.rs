#[cfg(unix)]
pub mod statvfs;
#[cfg(windows)]
pub mod win32;

#[cfg(unix)]
pub use statvfs::StatvfsStatter;
#[cfg(windows)]
pub use win32::Win32Statter;

/// The volume statter for the current build target
#[cfg(unix)]
pub type PlatformStatter = StatvfsStatter;
#[cfg(windows)]
pub type PlatformStatter = Win32Statter;
