//! Package manager detection: one probe, fixed priority, closed parsing.

use rigup::application::ports::{CommandChannel, Connector};
use rigup::application::services::detect::{PROBE_COMMAND, detect_package_manager};
use rigup::domain::error::InstallError;
use rigup::domain::pkgmgr::PackageManager;

use crate::helpers::{ScriptedConnector, failed_outcome, ok_outcome, password_credentials};

fn channel_with(outcomes: Vec<rigup::application::ports::CommandOutcome>) -> impl CommandChannel {
    ScriptedConnector::with_outcomes(outcomes)
        .connect(&password_credentials(), std::time::Duration::from_secs(1))
        .expect("connect")
}

#[test]
fn probe_checks_debian_family_first() {
    // The priority order is a fixed policy; apt-get must be probed before
    // dnf, dnf before yum, yum before zypper.
    let apt = PROBE_COMMAND.find("apt-get").expect("apt-get probed");
    let dnf = PROBE_COMMAND.find("command -v dnf").expect("dnf probed");
    let yum = PROBE_COMMAND.find("command -v yum").expect("yum probed");
    let zypper = PROBE_COMMAND.find("command -v zypper").expect("zypper probed");
    assert!(apt < dnf && dnf < yum && yum < zypper);
}

#[test]
fn detection_runs_exactly_the_probe_command() {
    let connector = ScriptedConnector::with_outcomes(vec![ok_outcome("apt\n")]);
    let mut channel = connector
        .connect(&password_credentials(), std::time::Duration::from_secs(1))
        .expect("connect");
    let manager = detect_package_manager(&mut channel).expect("detected");
    assert_eq!(manager, PackageManager::Apt);
    assert_eq!(connector.executed(), vec![PROBE_COMMAND.to_string()]);
}

#[test]
fn each_known_token_maps_to_its_manager() {
    for (token, expected) in [
        ("apt", PackageManager::Apt),
        ("dnf", PackageManager::Dnf),
        ("yum", PackageManager::Yum),
        ("zypper", PackageManager::Zypper),
    ] {
        let mut channel = channel_with(vec![ok_outcome(&format!("{token}\n"))]);
        assert_eq!(detect_package_manager(&mut channel).expect("detected"), expected);
    }
}

#[test]
fn unknown_token_means_unsupported_distribution() {
    let mut channel = channel_with(vec![ok_outcome("unknown\n")]);
    let err = detect_package_manager(&mut channel).expect_err("unsupported");
    assert!(matches!(err, InstallError::UnsupportedDistribution));
}

#[test]
fn unexpected_token_is_an_unsupported_package_manager() {
    let mut channel = channel_with(vec![ok_outcome("pacman\n")]);
    let err = detect_package_manager(&mut channel).expect_err("unexpected token");
    assert!(matches!(err, InstallError::UnsupportedPackageManager(token) if token == "pacman"));
}

#[test]
fn failing_probe_surfaces_the_exit_code() {
    let mut channel = channel_with(vec![failed_outcome(127, "bash: not found")]);
    let err = detect_package_manager(&mut channel).expect_err("probe failed");
    match err {
        InstallError::CommandExecutionFailed {
            exit_code, stderr, ..
        } => {
            assert_eq!(exit_code, 127);
            assert_eq!(stderr, "bash: not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
