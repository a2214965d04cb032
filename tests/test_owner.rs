//! Owner API tests on the system allocator.

use owner::{AutoRelease, Error, Fill, Owner, OwnerOptions, State, DEFAULT_SIZE};

#[test]
fn test_new_defaults() {
    let owner = Owner::new().expect("new should succeed");
    assert!(owner.is_present());
    assert_eq!(owner.state(), State::Owning);
    assert_eq!(owner.len(), DEFAULT_SIZE);
    assert!(owner.id().is_some());
}

#[test]
fn test_access_is_writable() {
    let mut owner = Owner::new().unwrap();
    {
        let mut view = owner.access().unwrap();
        view.fill(7);
        view[DEFAULT_SIZE - 1] = 9;
    }
    let bytes = owner.view().unwrap();
    assert_eq!(bytes[0], 7);
    assert_eq!(bytes[DEFAULT_SIZE - 1], 9);
}

#[test]
fn test_from_bytes_message() {
    let owner = Owner::from_bytes(b"Some message").unwrap();
    assert_eq!(owner.len(), DEFAULT_SIZE);
    assert_eq!(owner.message().unwrap(), b"Some message");
}

#[test]
fn test_message_on_empty() {
    let mut owner = Owner::from_bytes(b"gone").unwrap();
    owner.release();
    assert_eq!(owner.message().unwrap_err(), Error::UseAfterRelease);
}

#[test]
fn test_moved_owner_can_be_returned() {
    fn build() -> owner::Result<Owner> {
        let owner = Owner::with_options(OwnerOptions {
            size: 16,
            fill: Fill::Byte(1),
            ..Default::default()
        })?;
        Ok(owner)
    }

    let owner = build().unwrap();
    assert_eq!(owner.view().unwrap(), &[1u8; 16]);
}

#[test]
fn test_auto_release_create() {
    let mut scoped = AutoRelease::create().unwrap();
    scoped.access().unwrap().write_message(b"hi").unwrap();
    assert_eq!(scoped.message().unwrap(), b"hi");
}

#[test]
fn test_owner_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Owner>();
    assert_send::<AutoRelease>();
}
