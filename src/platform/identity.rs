//! Host platform-identification string.
//!
//! Builds the conventional `<system>-<release>-<machine>-with-<tag>` string,
//! e.g. `Linux-3.8.13-bone47-armv7l-with-debian-7.4`, where the tag is the
//! distribution id and version, or `glibc<major.minor>` when no distribution
//! is known.

use sysinfo::System;

/// Source of the platform-identification string.
pub trait PlatformIdentity: Send + Sync {
    fn describe(&self) -> String;
}

/// Identity of the machine this process runs on
#[derive(Debug, Default, Clone, Copy)]
pub struct HostIdentity;

impl PlatformIdentity for HostIdentity {
    fn describe(&self) -> String {
        let uname = Uname::current();
        let tag = distribution_tag().or_else(libc_tag);
        compose(&uname.sysname, &uname.release, &uname.machine, tag.as_deref())
    }
}

/// Fixed identity string, for captured environments and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity(pub String);

impl StaticIdentity {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }
}

impl PlatformIdentity for StaticIdentity {
    fn describe(&self) -> String {
        self.0.clone()
    }
}

/// Join the identity parts, dropping empty ones.
pub fn compose(sysname: &str, release: &str, machine: &str, tag: Option<&str>) -> String {
    let mut parts: Vec<&str> = [sysname, release, machine]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

    if let Some(tag) = tag.filter(|t| !t.is_empty()) {
        parts.push("with");
        parts.push(tag);
    }

    parts.join("-")
}

#[derive(Debug, Clone, Default)]
struct Uname {
    sysname: String,
    release: String,
    machine: String,
}

impl Uname {
    #[cfg(unix)]
    fn current() -> Self {
        use std::ffi::CStr;

        // SAFETY: utsname is plain old data, so a zeroed value is valid and
        // uname only writes NUL-terminated strings into its fields.
        let mut raw: libc::utsname = unsafe { std::mem::zeroed() };
        // SAFETY: `raw` is a valid, writable utsname.
        if unsafe { libc::uname(&mut raw) } != 0 {
            log::debug!("uname failed, falling back to sysinfo");
            return Self::fallback();
        }

        let field = |chars: &[libc::c_char]| {
            // SAFETY: uname succeeded, so every field is NUL-terminated.
            unsafe { CStr::from_ptr(chars.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        };

        Self {
            sysname: field(&raw.sysname),
            release: field(&raw.release),
            machine: field(&raw.machine),
        }
    }

    #[cfg(not(unix))]
    fn current() -> Self {
        Self::fallback()
    }

    fn fallback() -> Self {
        Self {
            sysname: System::name().unwrap_or_default(),
            release: System::kernel_version().unwrap_or_default(),
            machine: std::env::consts::ARCH.to_string(),
        }
    }
}

fn distribution_tag() -> Option<String> {
    let id = System::distribution_id();
    // sysinfo reports the bare OS name when there is no os-release file
    if id.is_empty() || id == std::env::consts::OS {
        return None;
    }

    match System::os_version() {
        Some(version) if !version.is_empty() => Some(format!("{}-{}", id, version)),
        _ => Some(id),
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn libc_tag() -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: gnu_get_libc_version returns a pointer to a static string.
    let version = unsafe { CStr::from_ptr(libc::gnu_get_libc_version()) }.to_str().ok()?;
    glibc_tag(version)
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
fn libc_tag() -> Option<String> {
    None
}

/// `glibc<major.minor>` for a glibc version string such as `2.31.9000`.
pub fn glibc_tag(version: &str) -> Option<String> {
    let mut parts = version.trim().split('.');
    let major = parts.next().filter(|p| !p.is_empty())?;
    let minor = parts.next().filter(|p| !p.is_empty()).unwrap_or("0");
    Some(format!("glibc{}.{}", major, minor))
}
