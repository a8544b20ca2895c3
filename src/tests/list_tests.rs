use std::time::Duration;

use super::*;
use crate::fake_api::{employee, staff, FakeApi};

fn list_over(api: &Arc<FakeApi>) -> EmployeeList {
    EmployeeList::new(api.clone())
}

#[tokio::test]
async fn load_replaces_records_and_counts_pages() {
    let api = FakeApi::with_employees(staff(23));
    let mut list = list_over(&api);

    list.load().await;

    assert_eq!(list.records().len(), 23);
    assert_eq!(list.page_count(), 3);
    assert_eq!(list.error(), None);
    assert!(!list.is_busy());
    assert_eq!(list.visible_page().len(), 10);

    list.go_to_page(3);
    assert_eq!(list.visible_page(), &list.records()[20..23]);
}

#[tokio::test]
async fn visible_page_is_the_matching_slice_for_every_page() {
    for (count, page_size) in [(1, 10), (10, 10), (11, 10), (37, 5), (9, 3)] {
        let api = FakeApi::with_employees(staff(count));
        let mut list = EmployeeList::with_page_size(api.clone(), page_size);
        list.load().await;

        let expected_pages = (count as usize).div_ceil(page_size);
        assert_eq!(list.page_count(), expected_pages);

        for page in 1..=expected_pages {
            list.go_to_page(page);
            let start = (page - 1) * page_size;
            let end = (page * page_size).min(count as usize);
            assert_eq!(list.visible_page(), &list.records()[start..end]);
        }
    }
}

#[tokio::test]
async fn paging_stays_within_bounds() {
    let api = FakeApi::with_employees(staff(25));
    let mut list = list_over(&api);
    list.load().await;

    list.prev_page();
    assert_eq!(list.page(), 1);

    list.next_page();
    list.next_page();
    list.next_page();
    assert_eq!(list.page(), 3);

    list.go_to_page(0);
    assert_eq!(list.page(), 1);
    list.go_to_page(99);
    assert_eq!(list.page(), 3);
}

#[tokio::test]
async fn empty_result_is_a_fixed_first_page() {
    let api = FakeApi::empty();
    let mut list = list_over(&api);
    list.load().await;

    assert_eq!(list.page_count(), 0);
    list.next_page();
    list.go_to_page(4);
    list.prev_page();
    assert_eq!(list.page(), 1);
    assert!(list.visible_page().is_empty());
    assert_eq!(list.empty_state(), EmptyState::NoEmployees);
}

#[tokio::test]
async fn load_failure_sets_error_and_clears_records() {
    let api = FakeApi::with_employees(staff(3));
    let mut list = list_over(&api);
    list.load().await;
    assert_eq!(list.records().len(), 3);

    api.fail("fetch_all");
    list.load().await;

    assert_eq!(list.error(), Some(LOAD_FAILED));
    assert!(list.records().is_empty());
    assert_eq!(list.page_count(), 0);

    api.recover("fetch_all");
    list.load().await;
    assert_eq!(list.error(), None);
    assert_eq!(list.records().len(), 3);
}

#[tokio::test]
async fn search_filters_by_name_and_resets_page() {
    let mut employees = staff(15);
    employees.push(employee(100, "Ada Lovelace", "Engineering"));
    let api = FakeApi::with_employees(employees);
    let mut list = list_over(&api);
    list.load().await;
    list.go_to_page(2);

    list.search("  ada ").await;

    assert_eq!(list.search_term(), "ada");
    assert!(list.is_searching());
    assert_eq!(list.page(), 1);
    assert_eq!(list.records().len(), 1);
    assert_eq!(list.records()[0].name, "Ada Lovelace");
    assert_eq!(api.call_count("search"), 1);
}

#[tokio::test]
async fn search_collects_every_server_page() {
    let api = FakeApi::with_employees(staff(250));
    let mut list = list_over(&api);

    list.search("employee").await;

    assert_eq!(list.records().len(), 250);
    assert_eq!(list.page_count(), 25);
    assert_eq!(api.call_count("search"), 3);
}

#[tokio::test]
async fn blank_search_behaves_like_load() {
    let api = FakeApi::with_employees(staff(4));
    let mut list = list_over(&api);

    list.search("   ").await;

    assert_eq!(api.calls(), vec!["fetch_all"]);
    assert!(!list.is_searching());
    assert_eq!(list.records().len(), 4);
}

#[tokio::test]
async fn search_failure_empties_records() {
    let api = FakeApi::with_employees(staff(4));
    let mut list = list_over(&api);
    list.load().await;
    api.fail("search");

    list.search("employee").await;

    assert_eq!(list.error(), Some(SEARCH_FAILED));
    assert!(list.records().is_empty());
    assert_eq!(list.search_term(), "employee");
}

#[tokio::test]
async fn search_failing_mid_walk_keeps_no_partial_matches() {
    let api = FakeApi::with_employees(staff(250));
    let mut list = list_over(&api);
    list.load().await;
    api.fail_search_from(1);

    list.search("employee").await;

    assert_eq!(list.error(), Some(SEARCH_FAILED));
    assert!(list.records().is_empty());
    assert_eq!(list.page(), 1);
    assert_eq!(api.call_count("search"), 2);
}

#[tokio::test]
async fn search_walk_ends_when_server_repeats_first_page() {
    let api = FakeApi::with_employees(staff(150));
    api.ignore_search_page();
    let mut list = list_over(&api);

    tokio::time::timeout(Duration::from_secs(5), list.search("employee"))
        .await
        .expect("search walk did not finish");

    assert_eq!(list.error(), None);
    assert_eq!(api.call_count("search"), 2);
    assert_eq!(list.records().len(), 200);
}

#[tokio::test]
async fn zero_match_search_differs_from_empty_directory() {
    let api = FakeApi::with_employees(staff(4));
    let mut list = list_over(&api);

    list.search("nobody").await;

    assert!(list.records().is_empty());
    assert_eq!(list.page_count(), 0);
    assert_eq!(list.error(), None);
    assert_eq!(list.empty_state(), EmptyState::NoMatches);

    let empty = FakeApi::empty();
    let mut blank = list_over(&empty);
    blank.load().await;
    assert_eq!(blank.empty_state(), EmptyState::NoEmployees);
}

#[tokio::test]
async fn clear_search_matches_a_fresh_load() {
    let mut employees = staff(12);
    employees.push(employee(50, "Grace Hopper", "Navy"));
    let api = FakeApi::with_employees(employees);

    let mut fresh = list_over(&api);
    fresh.load().await;

    let mut list = list_over(&api);
    list.search("grace").await;
    assert_eq!(list.records().len(), 1);

    list.clear_search().await;
    list.load().await;

    assert!(!list.is_searching());
    assert_eq!(list.records(), fresh.records());
}

#[tokio::test]
async fn failed_delete_leaves_records_untouched() {
    let api = FakeApi::with_employees(staff(12));
    let mut list = list_over(&api);
    list.load().await;
    list.go_to_page(2);
    let before = list.records().to_vec();
    api.clear_calls();
    api.fail("remove");

    let deleted = list.delete_record(&EmployeeId::Number(3)).await;

    assert!(!deleted);
    assert_eq!(list.records(), before.as_slice());
    assert_eq!(list.page(), 2);
    assert_eq!(list.error(), Some(DELETE_FAILED));
    assert_eq!(api.calls(), vec!["remove"]);
}

#[tokio::test]
async fn delete_reloads_the_full_list() {
    let api = FakeApi::with_employees(staff(5));
    let mut list = list_over(&api);
    list.load().await;

    let deleted = list.delete_record(&EmployeeId::Number(2)).await;

    assert!(deleted);
    assert_eq!(api.call_count("fetch_all"), 2);
    assert_eq!(list.records().len(), 4);
    assert!(list.records().iter().all(|e| e.id != EmployeeId::Number(2)));
}

#[tokio::test]
async fn delete_reruns_the_active_search() {
    let api = FakeApi::with_employees(staff(12));
    let mut list = list_over(&api);
    list.search("employee 1").await;
    assert_eq!(list.records().len(), 4);

    list.delete_record(&EmployeeId::Number(10)).await;

    assert_eq!(api.call_count("fetch_all"), 0);
    assert_eq!(api.call_count("search"), 2);
    assert_eq!(list.search_term(), "employee 1");
    let names: Vec<&str> = list.records().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Employee 1", "Employee 11", "Employee 12"]);
}

#[tokio::test]
async fn delete_of_last_row_on_last_page_moves_back() {
    let api = FakeApi::with_employees(staff(11));
    let mut list = list_over(&api);
    list.load().await;
    list.go_to_page(2);

    list.delete_record(&EmployeeId::Number(11)).await;

    assert_eq!(list.page_count(), 1);
    assert_eq!(list.page(), 1);
    assert_eq!(list.visible_page().len(), 10);
}

#[tokio::test]
async fn dismiss_error_clears_message() {
    let api = FakeApi::empty();
    api.fail("fetch_all");
    let mut list = list_over(&api);
    list.load().await;
    assert!(list.error().is_some());

    list.dismiss_error();

    assert_eq!(list.error(), None);
}
