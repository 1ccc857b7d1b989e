use std::cell::RefCell;
use std::collections::BTreeMap;

use super::*;

fn store(entries: &[(&str, &str)]) -> RefCell<BTreeMap<String, String>> {
    RefCell::new(entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}

#[test]
fn write_all_applies_every_entry() {
    let map = store(&[]);
    let result: Result<(), String> = write_all(
        &[("accessToken", "T1"), ("refreshToken", "T2")],
        &[None, None],
        |k, v| {
            map.borrow_mut().insert(k.to_owned(), v.to_owned());
            Ok(())
        },
        |k| {
            map.borrow_mut().remove(k);
        },
    );

    assert!(result.is_ok());
    assert_eq!(map.borrow().get("accessToken").map(String::as_str), Some("T1"));
    assert_eq!(map.borrow().get("refreshToken").map(String::as_str), Some("T2"));
}

#[test]
fn write_all_rolls_back_when_second_write_fails() {
    let map = store(&[("accessToken", "OLD")]);
    let result = write_all(
        &[("accessToken", "T1"), ("refreshToken", "T2")],
        &[Some("OLD".to_owned()), None],
        |k, v| {
            if k == "refreshToken" {
                return Err("QuotaExceededError".to_owned());
            }
            map.borrow_mut().insert(k.to_owned(), v.to_owned());
            Ok(())
        },
        |k| {
            map.borrow_mut().remove(k);
        },
    );

    assert_eq!(result, Err("QuotaExceededError".to_owned()));
    assert_eq!(map.borrow().get("accessToken").map(String::as_str), Some("OLD"));
    assert!(!map.borrow().contains_key("refreshToken"));
}

#[test]
fn write_all_removes_keys_that_were_absent() {
    let map = store(&[]);
    let _ = write_all(
        &[("accessToken", "T1"), ("refreshToken", "T2")],
        &[None, None],
        |k, v| {
            if k == "refreshToken" {
                return Err(());
            }
            map.borrow_mut().insert(k.to_owned(), v.to_owned());
            Ok(())
        },
        |k| {
            map.borrow_mut().remove(k);
        },
    );

    assert!(map.borrow().is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_without_browser_reads_empty() {
    let session = ClientSession::new(BrowserStorage);
    assert!(!session.is_authenticated());
    assert!(session.clear_session().is_ok());
}
