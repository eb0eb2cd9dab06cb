use sbc_platform::platform::{BoardNameRegistry, StaticBoardNameProvider, StaticIdentity, MRAA};
use sbc_platform::{PlatformDetector, PlatformError, PlatformKind};
use std::fs;
use tempfile::TempDir;

const PI_2_CPUINFO: &str = "processor\t: 0
model name\t: ARMv7 Processor rev 5 (v7l)
BogoMIPS\t: 38.40
Features\t: half thumb fastmult vfp edsp neon vfpv3 tls vfpv4 idiva idivt vfpd32 lpae evtstrm
CPU implementer\t: 0x41
CPU architecture: 7

Hardware\t: BCM2709
Revision\t: a01041
Serial\t\t: 000000003d1d1c36
";

const BEAGLEBONE_CPUINFO: &str = "processor\t: 0
model name\t: ARMv7 Processor rev 2 (v7l)
Features\t: swp half thumb fastmult vfp edsp thumbee neon vfpv3 tls
Hardware\t: Generic AM33XX (Flattened Device Tree)
Revision\t: 0000
";

const CUBIEBOARD4_CPUINFO: &str = "Processor\t: ARMv7 Processor rev 0 (v7l)
processor\t: 0
BogoMIPS\t: 2400.00
Hardware\t: sun9i
Revision\t: 0000
";

fn write_cpuinfo(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("cpuinfo");
    fs::write(&path, contents).unwrap();
    path
}

fn detector(dir: &TempDir, contents: &str, identity: &str) -> PlatformDetector {
    PlatformDetector::new()
        .with_hardware_info_path(write_cpuinfo(dir, contents))
        .with_identity(StaticIdentity::new(identity))
        .with_board_names(BoardNameRegistry::empty())
}

#[test]
fn test_pi_version_from_hardware_field() {
    let dir = TempDir::new().unwrap();

    let d = detector(&dir, "Hardware   : BCM2708\n", "");
    assert_eq!(d.detect_pi_version().unwrap(), Some(1));

    let d = detector(&dir, "Hardware   : BCM2709\n", "");
    assert_eq!(d.detect_pi_version().unwrap(), Some(2));

    let d = detector(&dir, "Hardware   : BCM2835\n", "");
    assert_eq!(d.detect_pi_version().unwrap(), None);

    let d = detector(&dir, "processor : 0\n", "");
    assert_eq!(d.detect_pi_version().unwrap(), None);
}

#[test]
fn test_cubie_version_from_hardware_field() {
    let dir = TempDir::new().unwrap();

    let d = detector(&dir, CUBIEBOARD4_CPUINFO, "");
    assert_eq!(d.detect_cubie_version(), Some(4));

    let d = detector(&dir, "Hardware   : sun8i\n", "");
    assert_eq!(d.detect_cubie_version(), Some(5));

    let d = detector(&dir, PI_2_CPUINFO, "");
    assert_eq!(d.detect_cubie_version(), None);
}

#[test]
fn test_raspberry_pi_ignores_platform_identity() {
    let dir = TempDir::new().unwrap();
    let d = detector(&dir, PI_2_CPUINFO, "Linux-3.18.7-v7+-armv7l-with-debian-7.8");
    assert_eq!(d.detect_platform(), PlatformKind::RaspberryPi);
}

#[test]
fn test_beaglebone_identity_markers() {
    let dir = TempDir::new().unwrap();

    for identity in [
        "Linux-3.8.13-bone47-armv7l-with-debian-7.4",
        "Linux-4.4.9-ti-r25-ARMV7L-WITH-UBUNTU-16.04-xenial",
        "Linux-3.8.13-bone70-armv7l-with-glibc2.4",
    ] {
        let d = detector(&dir, BEAGLEBONE_CPUINFO, identity);
        assert_eq!(d.detect_platform(), PlatformKind::BeagleboneBlack, "{}", identity);
    }
}

#[test]
fn test_other_identities_are_unknown() {
    let dir = TempDir::new().unwrap();

    for identity in [
        "Linux-5.15.0-x86_64-with-glibc2.35",
        "Linux-3.4.39-armv7l-with-linaro-14.04",
        "Linux-5.10.0-aarch64-with-debian-11",
    ] {
        let d = detector(&dir, "processor : 0\n", identity);
        assert_eq!(d.detect_platform(), PlatformKind::Unknown, "{}", identity);
    }
}

#[test]
fn test_minnowboard_capability() {
    let dir = TempDir::new().unwrap();
    let mut registry = BoardNameRegistry::empty();
    registry.register_provider(StaticBoardNameProvider::new(
        MRAA,
        Some("MinnowBoard MAX".to_string()),
    ));

    let d = detector(&dir, "processor : 0\n", "Linux-3.18.0-x86_64-with-debian-8.2")
        .with_board_names(registry);
    assert_eq!(d.detect_platform(), PlatformKind::Minnowboard);
}

#[test]
fn test_missing_capability_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let mut registry = BoardNameRegistry::empty();
    registry.register(MRAA, || {
        Err(PlatformError::capability_missing("libmraa not installed"))
    });

    let d = detector(&dir, "processor : 0\n", "Linux-x86_64").with_board_names(registry);
    assert_eq!(d.detect_platform(), PlatformKind::Unknown);
}

#[test]
fn test_unreadable_source() {
    let d = PlatformDetector::new()
        .with_hardware_info_path("/nonexistent/proc/cpuinfo")
        .with_identity(StaticIdentity::new("Linux-armv7l-with-debian-9"))
        .with_board_names(BoardNameRegistry::empty());

    // composite detection falls through to the next check
    assert_eq!(d.detect_platform(), PlatformKind::BeagleboneBlack);
    assert_eq!(d.detect_cubie_version(), None);

    let err = d.detect_pi_version().unwrap_err();
    assert!(matches!(err, PlatformError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("/nonexistent/proc/cpuinfo"));
}

#[test]
fn test_source_is_reread_on_every_call() {
    let dir = TempDir::new().unwrap();
    let path = write_cpuinfo(&dir, "Hardware : BCM2708\n");
    let d = PlatformDetector::new()
        .with_hardware_info_path(&path)
        .with_identity(StaticIdentity::new(""))
        .with_board_names(BoardNameRegistry::empty());

    assert_eq!(d.detect_pi_version().unwrap(), Some(1));
    fs::write(&path, "Hardware : sun8i\n").unwrap();
    assert_eq!(d.detect_pi_version().unwrap(), None);
    assert_eq!(d.detect_cubie_version(), Some(5));
}

#[test]
fn test_detector_is_shareable_across_threads() {
    let dir = TempDir::new().unwrap();
    let d = std::sync::Arc::new(detector(&dir, PI_2_CPUINFO, ""));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = std::sync::Arc::clone(&d);
            std::thread::spawn(move || d.detect_platform())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), PlatformKind::RaspberryPi);
    }
}

#[test]
fn test_crlf_dump_is_detected() {
    let dir = TempDir::new().unwrap();

    let d = detector(&dir, "Hardware\t: BCM2708\r\nRevision\t: 0002\r\n", "");
    assert_eq!(d.detect_pi_version().unwrap(), Some(1));
    assert_eq!(d.detect_pi_revision().unwrap(), 1);
    assert_eq!(d.detect_platform(), PlatformKind::RaspberryPi);

    let d = detector(&dir, "Processor\t: ARMv7 Processor rev 0 (v7l)\r\nHardware\t: sun8i\r\n", "");
    assert_eq!(d.detect_cubie_version(), Some(5));
}
