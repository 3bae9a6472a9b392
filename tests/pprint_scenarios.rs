//! End-to-end formatting scenarios.
//!
//! These tests run real SQL text through the full pipeline (tokenize,
//! optionally uppercase keywords, pretty-print, render) and compare the
//! output line by line against the expected layout.

use rstest::rstest;
use sqlpprint::sql::filters::{KeywordCaseFilter, PrettyPrintFilter};
use sqlpprint::sql::pipeline::Pipeline;

/// Format SQL text, optionally uppercasing keywords first.
fn pretty(sql: &str, uppercase: bool) -> String {
    let mut pipeline = Pipeline::new();
    if uppercase {
        pipeline = pipeline.add_filter(KeywordCaseFilter::upper());
    }
    pipeline.add_filter(PrettyPrintFilter::default()).format(sql)
}

/// Assert formatted output matches the expected lines plus the trailing
/// newline the filter always appends.
fn assert_formatted(output: &str, expected_lines: &[&str]) {
    assert!(!output.is_empty(), "output should not be empty");
    assert!(output.ends_with('\n'), "expected trailing newline");
    assert_eq!(&output[..output.len() - 1], expected_lines.join("\n"));
}

const SIMPLE_SQL: &str = "select * from users as u inner join users_groups as ug on u.id = ug.user_id where u.id = 123";

#[rstest]
#[case::upper(
    true,
    &[
        "SELECT *",
        "FROM users AS u",
        "INNER JOIN users_groups AS ug",
        "ON u.id = ug.user_id",
        "WHERE u.id = 123",
    ]
)]
#[case::lower(
    false,
    &[
        "select *",
        "from users as u",
        "inner join users_groups as ug",
        "on u.id = ug.user_id",
        "where u.id = 123",
    ]
)]
fn test_simple_select(#[case] uppercase: bool, #[case] expected: &[&str]) {
    assert_formatted(&pretty(SIMPLE_SQL, uppercase), expected);
}

#[test]
fn test_create_from_select() {
    let sql = "create temporary table users_temp select * from users as u inner join users_groups as ug on u.id = ug.user_id";
    assert_formatted(
        &pretty(sql, true),
        &[
            "CREATE temporary TABLE users_temp",
            "SELECT *",
            "FROM users AS u",
            "INNER JOIN users_groups AS ug",
            "ON u.id = ug.user_id",
        ],
    );
}

#[test]
fn test_in_list_indents_and_group_by_breaks() {
    // `IN (` follows a keyword, so the list opens a nested level; the
    // closing `)` returns to the clause indent and GROUP starts a line.
    let sql = "select * from oranges where oranges.apple_id in (%s, %s, %s) group by oranges.user_id";
    assert_formatted(
        &pretty(sql, true),
        &[
            "SELECT *",
            "FROM oranges",
            "WHERE oranges.apple_id IN (",
            "    %s, %s, %s",
            ")",
            "GROUP BY oranges.user_id",
        ],
    );
}

#[test]
fn test_function_call_parens_stay_inline() {
    let sql = "select substring_index(group_concat(u.id), %s, %s) as closest from users as u";
    assert_formatted(
        &pretty(sql, true),
        &[
            "SELECT substring_index(group_concat(u.id), %s, %s) AS closest",
            "FROM users AS u",
        ],
    );
}

#[test]
fn test_complex_subquery() {
    let sql = "select oranges.id as oranges_id, oranges.apple_id as oranges_apple_id, oranges.user_id as oranges_user_id, oranges.group_id as oranges_group_id, oranges.role_id as oranges_role_id, oranges.created_on as oranges_created_on, oranges.modified_on as oranges_modified_on, oranges.unique_key as oranges_unique_key from oranges inner join (select oranges.user_id as user_id, oranges.group_id as group_id, substring_index(group_concat(oranges.id order by field(oranges.apple_id, %s, %s, %s)), %s, %s) as closest_id from oranges where oranges.apple_id in (%s, %s, %s) group by oranges.user_id, oranges.group_id) as anon_1 on oranges.id = anon_1.closest_id";
    let output = pretty(sql, true);
    assert!(output.ends_with('\n'));
    insta::assert_snapshot!(output.trim_end_matches('\n'), @r###"
SELECT oranges.id AS oranges_id, oranges.apple_id AS oranges_apple_id, oranges.user_id AS oranges_user_id, oranges.group_id AS oranges_group_id, oranges.role_id AS oranges_role_id, oranges.created_on AS oranges_created_on, oranges.modified_on AS oranges_modified_on, oranges.unique_key AS oranges_unique_key
FROM oranges
INNER JOIN (
    SELECT oranges.user_id AS user_id, oranges.group_id AS group_id, substring_index(group_concat(oranges.id ORDER BY field(oranges.apple_id, %s, %s, %s)), %s, %s) AS closest_id
    FROM oranges
    WHERE oranges.apple_id IN (
        %s, %s, %s
    )
    GROUP BY oranges.user_id, oranges.group_id
) AS anon_1
ON oranges.id = anon_1.closest_id
"###);
}

#[test]
fn test_incoming_whitespace_is_normalized() {
    // Irregular multi-line input formats the same as its single-line
    // equivalent: embedded newlines and indentation collapse away.
    let sql = [
        "SELECT apples.id AS apples_id, \n apples.name AS apples_name, apples.slug AS apples_slug, apples.created_on AS apples_created_on, apples.modified_on AS apples_modified_on, apples.restricted AS apples_restricted, apples.is_podcast AS apples_is_podcast, apples.parent_id AS apples_parent_id, apples.site_id AS apples_site_id ",
        "       FROM apples ",
        "WHERE %s = apples.site_id   ",
        "     AND apples.id = %s ",
        " LIMIT %s",
    ]
    .join("\n");
    assert_formatted(
        &pretty(&sql, true),
        &[
            "SELECT apples.id AS apples_id, apples.name AS apples_name, apples.slug AS apples_slug, apples.created_on AS apples_created_on, apples.modified_on AS apples_modified_on, apples.restricted AS apples_restricted, apples.is_podcast AS apples_is_podcast, apples.parent_id AS apples_parent_id, apples.site_id AS apples_site_id",
            "FROM apples",
            "WHERE %s = apples.site_id",
            "AND apples.id = %s",
            "LIMIT %s",
        ],
    );
}

#[test]
fn test_formatting_is_a_fixed_point() {
    // Reformatting already-formatted output reproduces it exactly: the
    // generated breaks tokenize as ordinary whitespace and regenerate in
    // the same places.
    let complex = "select a.id from a inner join (select b.id from b where b.x in (%s, %s) group by b.id) as sub on a.id = sub.id where a.y = %s";
    for sql in [SIMPLE_SQL, complex] {
        let once = pretty(sql, true);
        let twice = pretty(&once, true);
        assert_eq!(twice, once);
    }
}
