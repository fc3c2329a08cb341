//! Session persistence across client restarts, backed by a real file.

use std::{fs, sync::Arc};

use newsroom_domain::{role::Role, session::Session, user::Username};
use newsroom_infra::{FileSessionStorage, SessionManager};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn start(dir: &TempDir) -> SessionManager {
    SessionManager::new(Arc::new(FileSessionStorage::new(
        dir.path().join("session.json"),
    )))
}

#[rstest]
fn test_session_survives_restart(dir: TempDir) {
    let first = start(&dir);
    first.set_user("alice").unwrap();
    first.set_role("redacteur").unwrap();
    drop(first);

    let restarted = start(&dir);

    assert_eq!(
        restarted.current(),
        Some(Session::new(Username::new("alice").unwrap(), Role::Redacteur))
    );
}

#[rstest]
fn test_logout_survives_restart(dir: TempDir) {
    let first = start(&dir);
    first.set_user("alice").unwrap();
    first.set_role("redacteur").unwrap();
    first.logout().unwrap();
    drop(first);

    let restarted = start(&dir);

    assert_eq!(restarted.get_user(), None);
    assert_eq!(restarted.get_role(), None);
}

#[rstest]
fn test_tampered_role_reads_as_logged_out(dir: TempDir) {
    fs::write(
        dir.path().join("session.json"),
        r#"{"user":"mallory","role":"admin"}"#,
    )
    .unwrap();

    let sut = start(&dir);

    assert_eq!(sut.get_user(), Some(Username::new("mallory").unwrap()));
    assert_eq!(sut.get_role(), None);
    assert_eq!(sut.current(), None);
}

#[rstest]
fn test_corrupt_file_reads_as_logged_out(dir: TempDir) {
    fs::write(dir.path().join("session.json"), "[1, 2").unwrap();

    let sut = start(&dir);

    assert_eq!(sut.current(), None);
}

#[rstest]
fn test_login_and_logout_recover_from_corrupt_file(dir: TempDir) {
    fs::write(dir.path().join("session.json"), "[1, 2").unwrap();
    let sut = start(&dir);

    sut.set_user("alice").unwrap();
    sut.set_role("redacteur").unwrap();
    assert_eq!(
        start(&dir).current(),
        Some(Session::new(Username::new("alice").unwrap(), Role::Redacteur))
    );

    fs::write(dir.path().join("session.json"), "[1, 2").unwrap();
    sut.logout().unwrap();

    assert_eq!(start(&dir).current(), None);
}
