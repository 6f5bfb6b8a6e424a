// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_activation_key, create_test_kickstart, create_test_lister};
use kickstart_lister_domain::PageControl;

#[test]
fn test_page_window_and_total() {
    let (mut lister, user) = create_test_lister();
    for label in ["ks-a", "ks-b", "ks-c", "ks-d", "ks-e"] {
        create_test_kickstart(&mut lister, user.org_id, label);
    }

    let pc = PageControl::new().with_start(2).with_page_size(2).unwrap();
    let page = lister.kickstarts_in_org(user.org_id, Some(&pc)).unwrap();

    assert_eq!(page.total_size(), 5);
    assert_eq!(page.start(), 2);
    assert_eq!(page.end(), 3);
    let labels: Vec<&str> = page.iter().map(|k| k.label.as_str()).collect();
    assert_eq!(labels, vec!["ks-b", "ks-c"]);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let (mut lister, user) = create_test_lister();
    create_test_kickstart(&mut lister, user.org_id, "only");

    let pc = PageControl::new().with_start(10);
    let page = lister.kickstarts_in_org(user.org_id, Some(&pc)).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_size(), 1);
}

#[test]
fn test_filter_is_case_insensitive_and_counts_matches() {
    let (mut lister, user) = create_test_lister();
    create_test_kickstart(&mut lister, user.org_id, "RHEL-9-web");
    create_test_kickstart(&mut lister, user.org_id, "rhel-8-db");
    create_test_kickstart(&mut lister, user.org_id, "sles-15");

    let pc = PageControl::new().with_filter("rhel").with_page_size(1).unwrap();
    let page = lister.kickstarts_in_org(user.org_id, Some(&pc)).unwrap();

    assert_eq!(page.total_size(), 2);
    assert_eq!(page.len(), 1);
}

#[test]
fn test_total_excludes_bootstrap_keys() {
    let (mut lister, user) = create_test_lister();
    create_test_activation_key(&mut lister, user.org_id, "one");
    create_test_activation_key(&mut lister, user.org_id, "two");
    let bootstrap: i64 = create_test_activation_key(&mut lister, user.org_id, "three");
    lister
        .store_mut()
        .set_activation_key_bootstrap(bootstrap, true)
        .unwrap();

    let pc = PageControl::new().with_page_size(1).unwrap();
    let page = lister.activation_keys_in_org(user.org_id, Some(&pc)).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.total_size(), 2);
}

#[test]
fn test_no_page_control_returns_everything() {
    let (mut lister, user) = create_test_lister();
    for i in 0..30 {
        create_test_kickstart(&mut lister, user.org_id, &format!("ks-{i:02}"));
    }

    let all = lister.kickstarts_in_org(user.org_id, None).unwrap();
    assert_eq!(all.len(), 30);

    let first_page = lister
        .kickstarts_in_org(user.org_id, Some(&PageControl::new()))
        .unwrap();
    assert_eq!(first_page.len(), 25);
    assert_eq!(first_page.total_size(), 30);
}
