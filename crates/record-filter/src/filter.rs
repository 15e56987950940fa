//! Multi-predicate filter over in-memory records
//!
//! A record passes when it satisfies the search predicate AND every category
//! predicate. Output keeps input order.

use std::collections::HashSet;

use tracing::trace;

use crate::error::FilterError;
use crate::record::Record;
use crate::state::{FilterState, ALL};

/// An equality filter: the filter's name in [`FilterState`] and the record
/// field it compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub field: String,
}

/// The searchable fields and category filters a page declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    search_fields: Vec<String>,
    categories: Vec<Category>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fields matched by the free-text search
    pub fn search<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add an equality filter named `name` over record field `field`
    pub fn category(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.categories.push(Category {
            name: name.into(),
            field: field.into(),
        });
        self
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Default state with every declared category set to `"All"`
    pub fn state(&self) -> FilterState {
        FilterState::new(self.categories.iter().map(|c| c.name.clone()))
    }

    /// Whether a single record passes every active predicate
    pub fn matches<R: Record + ?Sized>(&self, record: &R, state: &FilterState) -> bool {
        let needle = state.search_text().to_lowercase();
        self.passes(record, state, &needle)
    }

    /// Records passing every active predicate, in input order
    pub fn filter<'r, R: Record>(&self, records: &'r [R], state: &FilterState) -> Vec<&'r R> {
        let needle = state.search_text().to_lowercase();
        let visible: Vec<&R> = records
            .iter()
            .filter(|record| self.passes(*record, state, &needle))
            .collect();

        trace!(
            total = records.len(),
            visible = visible.len(),
            search = state.search_text(),
            "Filtered records"
        );
        visible
    }

    /// Owned variant of [`FilterSpec::filter`]
    pub fn filter_cloned<R: Record + Clone>(&self, records: &[R], state: &FilterState) -> Vec<R> {
        self.filter(records, state).into_iter().cloned().collect()
    }

    /// Dropdown options for a declared category filter
    pub fn options<R: Record>(
        &self,
        records: &[R],
        filter: &str,
    ) -> Result<Vec<String>, FilterError> {
        let category = self
            .categories
            .iter()
            .find(|c| c.name == filter)
            .ok_or_else(|| FilterError::UnknownFilter(filter.to_string()))?;
        Ok(distinct_values(records, &category.field))
    }

    fn passes<R: Record + ?Sized>(&self, record: &R, state: &FilterState, needle: &str) -> bool {
        self.passes_search(record, state, needle) && self.passes_categories(record, state)
    }

    fn passes_search<R: Record + ?Sized>(
        &self,
        record: &R,
        state: &FilterState,
        needle: &str,
    ) -> bool {
        if state.search_text().is_empty() {
            return true;
        }

        self.search_fields.iter().any(|field| {
            record
                .field(field)
                .map(|value| value.as_text().to_lowercase().contains(needle))
                .unwrap_or(false)
        })
    }

    fn passes_categories<R: Record + ?Sized>(&self, record: &R, state: &FilterState) -> bool {
        self.categories.iter().all(|category| {
            let selected = state.selection(&category.name);
            if selected == ALL {
                return true;
            }
            record
                .field(&category.field)
                .map(|value| value.as_text() == selected)
                .unwrap_or(false)
        })
    }
}

/// Filter `records` with ad hoc field lists.
///
/// `category_fields` pairs a filter name (as held in `state`) with the record
/// field it constrains.
pub fn filter<'r, R: Record>(
    records: &'r [R],
    state: &FilterState,
    search_fields: &[&str],
    category_fields: &[(&str, &str)],
) -> Vec<&'r R> {
    let spec = category_fields
        .iter()
        .fold(FilterSpec::new().search(search_fields.iter().copied()), |spec, (name, field)| {
            spec.category(*name, *field)
        });
    spec.filter(records, state)
}

/// `"All"` followed by each distinct value of `field`, in first-seen order.
///
/// Absent values are skipped. A literal `"All"` in the data is folded into
/// the sentinel.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(ALL.to_string());

    let mut values = vec![ALL.to_string()];
    for record in records {
        if let Some(value) = record.field(field) {
            let text = value.as_text().into_owned();
            if seen.insert(text.clone()) {
                values.push(text);
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Map, Value};

    fn tenants() -> Vec<Value> {
        vec![
            json!({
                "name": "Mark Davis",
                "email": "mark.d@example.com",
                "unit": "203",
                "building": "Harbor Plaza",
                "status": "warning"
            }),
            json!({
                "name": "Emma Johnson",
                "email": "emma.j@example.com",
                "unit": "101",
                "building": "Skyline Tower",
                "status": "good"
            }),
        ]
    }

    fn tenant_spec() -> FilterSpec {
        FilterSpec::new()
            .search(["name", "email", "unit"])
            .category("building", "building")
            .category("status", "status")
    }

    fn names(records: &[&Value]) -> Vec<String> {
        records
            .iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn unit(id: &str, building: &str, status: &str, tenant: Option<&str>) -> Value {
        json!({"id": id, "building": building, "status": status, "tenant": tenant})
    }

    fn units() -> Vec<Value> {
        vec![
            unit("101", "Skyline Tower", "Occupied", Some("Emma Johnson")),
            unit("203", "Harbor Plaza", "Occupied", Some("Mark Davis")),
            unit("305", "Riverfront Lofts", "Vacant", None),
            unit("410", "Skyline Tower", "Occupied", Some("Sarah & Michael Wong")),
            unit("512", "Harbor Plaza", "Maintenance", None),
        ]
    }

    #[test]
    fn test_default_state_returns_everything() {
        let records = tenants();
        let spec = tenant_spec();
        assert_eq!(spec.filter(&records, &spec.state()).len(), 2);
    }

    #[test]
    fn test_search_and_building_combined() {
        let records = tenants();
        let spec = tenant_spec();

        let harbor = spec
            .state()
            .with_search("mark")
            .with_selection("building", "Harbor Plaza")
            .unwrap();
        assert_eq!(names(&spec.filter(&records, &harbor)), vec!["Mark Davis"]);

        let skyline = spec
            .state()
            .with_search("mark")
            .with_selection("building", "Skyline Tower")
            .unwrap();
        assert!(spec.filter(&records, &skyline).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = tenants();
        let spec = FilterSpec::new().search(["building"]);

        let upper = spec.filter(&records, &spec.state().with_search("SKYLINE"));
        let lower = spec.filter(&records, &spec.state().with_search("skyline"));
        assert_eq!(upper, lower);
        assert_eq!(names(&upper), vec!["Emma Johnson"]);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let records = units();
        let spec = FilterSpec::new().category("status", "status");

        let vacant = spec
            .filter(&records, &spec.state().with_selection("status", "Vacant").unwrap());
        assert_eq!(vacant.len(), 1);
        assert_eq!(vacant[0]["id"], "305");

        let lowercase = spec
            .filter(&records, &spec.state().with_selection("status", "vacant").unwrap());
        assert!(lowercase.is_empty());
    }

    #[test]
    fn test_absent_field_only_fails_that_field() {
        let records = units();
        let spec = FilterSpec::new().search(["id", "building", "tenant"]);

        // Unit 305 has no tenant but still matches on building
        let matched = spec.filter(&records, &spec.state().with_search("river"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["id"], "305");

        let by_tenant = spec.filter(&records, &spec.state().with_search("wong"));
        assert_eq!(by_tenant.len(), 1);
        assert_eq!(by_tenant[0]["id"], "410");
    }

    #[test]
    fn test_absent_category_field_matches_only_all() {
        let records = vec![json!({"id": "1"}), json!({"id": "2", "status": "Vacant"})];
        let spec = FilterSpec::new().category("status", "status");

        assert_eq!(spec.filter(&records, &spec.state()).len(), 2);
        let vacant = spec.state().with_selection("status", "Vacant").unwrap();
        assert_eq!(spec.filter(&records, &vacant).len(), 1);
    }

    #[test]
    fn test_numeric_fields_compare_by_text() {
        let records = vec![json!({"id": 1, "sqft": 550}), json!({"id": 2, "sqft": 750})];
        let spec = FilterSpec::new().search(["sqft"]).category("size", "sqft");

        assert_eq!(spec.filter(&records, &spec.state().with_search("55")).len(), 1);
        let exact = spec.state().with_selection("size", "750").unwrap();
        assert_eq!(spec.filter(&records, &exact)[0]["id"], 2);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = units();
        let spec = FilterSpec::new().category("building", "building");
        let state = spec.state().with_selection("building", "Skyline Tower").unwrap();

        let ids: Vec<&str> = spec
            .filter(&records, &state)
            .iter()
            .filter_map(|r| r["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["101", "410"]);
    }

    #[test]
    fn test_free_function_matches_spec() {
        let records = tenants();
        let state = FilterState::new(["building", "status"])
            .with_search("EMMA")
            .with_selection("status", "good")
            .unwrap();

        let visible = filter(
            &records,
            &state,
            &["name", "email", "unit"],
            &[("building", "building"), ("status", "status")],
        );
        assert_eq!(names(&visible), vec!["Emma Johnson"]);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let records = units();
        assert_eq!(
            distinct_values(&records, "building"),
            vec!["All", "Skyline Tower", "Harbor Plaza", "Riverfront Lofts"]
        );
        assert_eq!(
            distinct_values(&records, "status"),
            vec!["All", "Occupied", "Vacant", "Maintenance"]
        );
    }

    #[test]
    fn test_distinct_values_skips_absent_and_sentinel() {
        let records = vec![
            json!({"tenant": null}),
            json!({"tenant": "All"}),
            json!({"tenant": "Emma Johnson"}),
        ];
        assert_eq!(distinct_values(&records, "tenant"), vec!["All", "Emma Johnson"]);
        assert_eq!(distinct_values(&records, "missing"), vec!["All"]);
    }

    #[test]
    fn test_options_for_declared_filter() {
        let records = units();
        let spec = FilterSpec::new().category("status", "status");

        assert_eq!(
            spec.options(&records, "status").unwrap(),
            vec!["All", "Occupied", "Vacant", "Maintenance"]
        );
        assert_eq!(
            spec.options(&records, "floorplan").unwrap_err(),
            FilterError::UnknownFilter("floorplan".to_string())
        );
    }

    #[test]
    fn test_matches_single_record() {
        let records = tenants();
        let spec = tenant_spec();
        let state = spec.state().with_selection("status", "warning").unwrap();

        assert!(spec.matches(&records[0], &state));
        assert!(!spec.matches(&records[1], &state));
    }

    #[test]
    fn test_filter_cloned_returns_owned_matches() {
        let records = units();
        let spec = FilterSpec::new().search(["tenant"]).category("building", "building");
        let state = spec
            .state()
            .with_search("o")
            .with_selection("building", "Skyline Tower")
            .unwrap();

        let owned = spec.filter_cloned(&records, &state);
        let borrowed: Vec<Value> = spec.filter(&records, &state).into_iter().cloned().collect();
        assert_eq!(owned, borrowed);
        let ids: Vec<&str> = owned.iter().filter_map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, vec!["101", "410"]);
    }

    #[test]
    fn test_json_map_records() {
        let records: Vec<Map<String, Value>> = units()
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        let spec = FilterSpec::new().search(["tenant"]).category("status", "status");

        let state = spec
            .state()
            .with_search("DAVIS")
            .with_selection("status", "Occupied")
            .unwrap();
        let visible = spec.filter(&records, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["id"], "203");
        assert_eq!(
            distinct_values(&records, "status"),
            vec!["All", "Occupied", "Vacant", "Maintenance"]
        );
    }

    #[test]
    fn test_boxed_records_of_mixed_types() {
        let mut row = std::collections::BTreeMap::new();
        row.insert("building".to_string(), "Harbor Plaza".to_string());
        row.insert("name".to_string(), "Lobby".to_string());

        let records: Vec<Box<dyn Record>> = vec![
            Box::new(unit("203", "Harbor Plaza", "Occupied", Some("Mark Davis"))),
            Box::new(row),
            Box::new(unit("101", "Skyline Tower", "Occupied", Some("Emma Johnson"))),
        ];
        let spec = FilterSpec::new().category("building", "building");
        let state = spec.state().with_selection("building", "Harbor Plaza").unwrap();

        assert_eq!(spec.filter(&records, &state).len(), 2);
        assert_eq!(
            distinct_values(&records, "building"),
            vec!["All", "Harbor Plaza", "Skyline Tower"]
        );
    }
}
