use std::collections::HashSet;
use storyshare_types::{BlockId, Error};

#[test]
fn block_id_new_is_unique() {
    let a = BlockId::new();
    let b = BlockId::new();
    assert_ne!(a, b);
}

#[test]
fn block_id_display_and_parse() {
    let id = BlockId::new();
    let parsed = BlockId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn block_id_parse_trims_whitespace() {
    let id = BlockId::new();
    let parsed: BlockId = format!(" {id}\n").parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn block_id_parse_invalid_is_invalid_uuid() {
    let err = BlockId::parse("garbage").unwrap_err();
    assert!(matches!(err, Error::InvalidUuid(_)));
    assert!(err.to_string().contains("invalid UUID"));
}

#[test]
fn block_id_from_str_invalid() {
    assert!("not-a-uuid".parse::<BlockId>().is_err());
}

#[test]
fn block_id_hash_and_eq() {
    let id = BlockId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}
