// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_backend, create_test_distro};
use crate::{
    BOOTSTRAP_PROFILE_NAME, CobblerConnection, InMemoryCobbler, Profile, ProvisioningBackend,
    ProvisioningError,
};
use kickstart_lister_domain::CobblerProfileDto;
use std::sync::Arc;

#[test]
fn test_created_profiles_are_listed_by_name() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);

    backend.create_profile(&conn, "zeta", &distro).unwrap();
    backend.create_profile(&conn, "alpha", &distro).unwrap();

    let names: Vec<String> = backend
        .list_profiles(&conn)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn test_bootstrap_profile_is_an_ordinary_profile_to_the_backend() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);

    backend
        .create_profile(&conn, BOOTSTRAP_PROFILE_NAME, &distro)
        .unwrap();
    assert_eq!(backend.list_profiles(&conn).unwrap().len(), 1);
}

#[test]
fn test_profile_converts_to_transfer_record() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);
    let profile: Profile = backend.create_profile(&conn, "test-profile", &distro).unwrap();

    let dto: CobblerProfileDto = profile.clone().into();
    assert_eq!(dto.id, profile.id);
    assert_eq!(dto.name, "test-profile");
    assert_eq!(dto.distro_name, "test-distro");
    assert_eq!(dto.kernel, "test-kernel");
    assert_eq!(dto.initrd, "test-initrd");
}

#[test]
fn test_duplicate_names_are_rejected() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);
    backend.create_profile(&conn, "p", &distro).unwrap();

    assert_eq!(
        backend.create_profile(&conn, "p", &distro),
        Err(ProvisioningError::Duplicate {
            kind: "Profile",
            name: String::from("p"),
        })
    );

    let again = crate::Distro::builder()
        .name("test-distro")
        .kernel("k")
        .initrd("i")
        .build(&backend, &conn);
    assert!(matches!(again, Err(ProvisioningError::Duplicate { kind: "Distro", .. })));
}

#[test]
fn test_profile_requires_existing_distro() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);
    backend.delete_distro(&conn, "test-distro").unwrap();

    assert_eq!(
        backend.create_profile(&conn, "p", &distro),
        Err(ProvisioningError::DistroNotFound(String::from("test-distro")))
    );
}

#[test]
fn test_distro_in_use_cannot_be_deleted() {
    let (backend, conn) = create_test_backend();
    let distro = create_test_distro(&backend, &conn);
    backend.create_profile(&conn, "p", &distro).unwrap();

    assert_eq!(
        backend.delete_distro(&conn, "test-distro"),
        Err(ProvisioningError::DistroInUse {
            distro: String::from("test-distro"),
            profiles: 1,
        })
    );

    backend.delete_profile(&conn, "p").unwrap();
    assert!(backend.delete_distro(&conn, "test-distro").is_ok());
    assert_eq!(
        backend.delete_profile(&conn, "p"),
        Err(ProvisioningError::ProfileNotFound(String::from("p")))
    );
}

#[test]
fn test_unknown_token_is_rejected() {
    let (backend, _) = create_test_backend();
    let forged: CobblerConnection = CobblerConnection::new("test", "token-forged");

    assert_eq!(
        backend.list_profiles(&forged),
        Err(ProvisioningError::InvalidToken)
    );
}

#[test]
fn test_token_is_bound_to_its_login() {
    let backend = InMemoryCobbler::new();
    let conn = backend.connect("alice").unwrap();
    let stolen: CobblerConnection = CobblerConnection::new("mallory", conn.token());

    assert_eq!(
        backend.list_profiles(&stolen),
        Err(ProvisioningError::InvalidToken)
    );
}

#[test]
fn test_login_restrictions() {
    let backend = InMemoryCobbler::with_logins(&["admin"]);

    assert!(backend.connect("admin").is_ok());
    assert_eq!(
        backend.connect("guest"),
        Err(ProvisioningError::AuthenticationFailed {
            login: String::from("guest"),
        })
    );
    assert!(matches!(
        InMemoryCobbler::new().connect(" "),
        Err(ProvisioningError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_unavailable_backend_fails_every_call() {
    let (backend, conn) = create_test_backend();
    backend.set_available(false);

    assert!(matches!(
        backend.list_profiles(&conn),
        Err(ProvisioningError::Unavailable(_))
    ));
    assert!(matches!(
        backend.connect("test"),
        Err(ProvisioningError::Unavailable(_))
    ));

    backend.set_available(true);
    assert!(backend.list_profiles(&conn).is_ok());
}

#[test]
fn test_shared_backend_through_arc() {
    let backend: Arc<InMemoryCobbler> = Arc::new(InMemoryCobbler::new());
    let conn = backend.connect("test").unwrap();
    let distro = create_test_distro(&backend, &conn);

    let handle = Arc::clone(&backend);
    std::thread::spawn(move || {
        let conn = handle.connect("worker").unwrap();
        handle.create_profile(&conn, "from-thread", &distro).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(backend.list_profiles(&conn).unwrap().len(), 1);
}

#[test]
fn test_disconnect_closes_the_session() {
    let (backend, conn) = create_test_backend();
    assert_eq!(backend.session_count().unwrap(), 1);

    backend.disconnect(&conn).unwrap();

    assert_eq!(backend.session_count().unwrap(), 0);
    assert_eq!(
        backend.list_profiles(&conn),
        Err(ProvisioningError::InvalidToken)
    );
    assert_eq!(
        backend.disconnect(&conn),
        Err(ProvisioningError::InvalidToken)
    );
}

#[test]
fn test_sessions_do_not_accumulate_when_closed() {
    let backend = InMemoryCobbler::new();

    for _ in 0..1000 {
        let conn = backend.connect("test").unwrap();
        backend.list_profiles(&conn).unwrap();
        backend.disconnect(&conn).unwrap();
    }

    assert_eq!(backend.session_count().unwrap(), 0);
}
