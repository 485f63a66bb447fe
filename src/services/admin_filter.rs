use std::collections::HashMap;

use crate::interceptors::{AppError, AppResult};

/// Query parameter carrying the free-text search term
const SEARCH_TERM_PARAM: &str = "searchTerm";

/// Fields eligible for case-insensitive substring search
const SEARCHABLE_FIELDS: [AdminField; 2] = [AdminField::Name, AdminField::Email];

/// Admin columns a query parameter may filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdminField {
    Name,
    Email,
    ContactNumber,
}

impl AdminField {
    /// Map an API query parameter to a column. Anything outside the
    /// schema is rejected here, before a query is ever built.
    fn from_param(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "contactNumber" => Some(Self::ContactNumber),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::ContactNumber => "contact_number",
        }
    }
}

/// Listing filter assembled from request query parameters.
///
/// A non-empty `searchTerm` becomes a disjunction of substring matches
/// over the searchable fields; every other recognized parameter becomes
/// an exact-match condition. The two groups combine with AND, and an
/// empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminFilter {
    search_term: Option<String>,
    exact: Vec<(AdminField, String)>,
}

impl AdminFilter {
    /// Build a filter from raw query parameters.
    ///
    /// An empty `searchTerm` is dropped rather than turned into a
    /// substring clause, which would otherwise match every record.
    pub fn from_query(mut params: HashMap<String, String>) -> AppResult<Self> {
        let search_term = params
            .remove(SEARCH_TERM_PARAM)
            .filter(|term| !term.is_empty());

        let mut exact = Vec::with_capacity(params.len());
        for (key, value) in params {
            let field = AdminField::from_param(&key)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown filter field: {}", key)))?;
            exact.push((field, value));
        }

        // HashMap iteration order is arbitrary; fix the clause order
        exact.sort_by_key(|(field, _)| *field);

        Ok(Self { search_term, exact })
    }

    /// Render the filter as a SELECT statement with numbered
    /// placeholders plus the bind values in matching order.
    pub fn to_select_sql(&self) -> (String, Vec<String>) {
        let mut binds: Vec<String> = Vec::new();
        let mut clauses: Vec<String> = Vec::new();

        if let Some(term) = &self.search_term {
            let pattern = format!("%{}%", escape_like(term));
            let alternatives: Vec<String> = SEARCHABLE_FIELDS
                .iter()
                .map(|field| {
                    binds.push(pattern.clone());
                    format!("{} ILIKE ${}", field.column(), binds.len())
                })
                .collect();
            clauses.push(format!("({})", alternatives.join(" OR ")));
        }

        for (field, value) in &self.exact {
            binds.push(value.clone());
            clauses.push(format!("{} = ${}", field.column(), binds.len()));
        }

        let mut sql = String::from("SELECT * FROM admins");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        // Insertion order; the API promises nothing stronger
        sql.push_str(" ORDER BY created_at");

        (sql, binds)
    }
}

/// Escape LIKE wildcards so the term is matched literally
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_parameters_matches_everything() {
        let filter = AdminFilter::from_query(HashMap::new()).unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(sql, "SELECT * FROM admins ORDER BY created_at");
        assert!(binds.is_empty());
    }

    #[test]
    fn search_term_expands_to_disjunction_over_searchable_fields() {
        let filter = AdminFilter::from_query(query(&[("searchTerm", "doe")])).unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(
            sql,
            "SELECT * FROM admins WHERE (name ILIKE $1 OR email ILIKE $2) ORDER BY created_at"
        );
        assert_eq!(binds, vec!["%doe%", "%doe%"]);
    }

    #[test]
    fn empty_search_term_is_dropped() {
        let filter = AdminFilter::from_query(query(&[("searchTerm", "")])).unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(sql, "SELECT * FROM admins ORDER BY created_at");
        assert!(binds.is_empty());
    }

    #[test]
    fn exact_filters_form_a_conjunction_in_stable_order() {
        let filter = AdminFilter::from_query(query(&[
            ("contactNumber", "0123"),
            ("name", "John Doe"),
            ("email", "j@x.com"),
        ]))
        .unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(
            sql,
            "SELECT * FROM admins WHERE name = $1 AND email = $2 AND contact_number = $3 \
             ORDER BY created_at"
        );
        assert_eq!(binds, vec!["John Doe", "j@x.com", "0123"]);
    }

    #[test]
    fn search_and_exact_clauses_combine_with_and() {
        let filter =
            AdminFilter::from_query(query(&[("searchTerm", "doe"), ("contactNumber", "0123")]))
                .unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(
            sql,
            "SELECT * FROM admins WHERE (name ILIKE $1 OR email ILIKE $2) \
             AND contact_number = $3 ORDER BY created_at"
        );
        assert_eq!(binds, vec!["%doe%", "%doe%", "0123"]);
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        let err = AdminFilter::from_query(query(&[("role", "ADMIN")])).unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("role"), "message was: {}", msg),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn like_wildcards_in_search_term_are_escaped() {
        let filter = AdminFilter::from_query(query(&[("searchTerm", "100%_a\\b")])).unwrap();
        let (_, binds) = filter.to_select_sql();

        assert_eq!(binds[0], "%100\\%\\_a\\\\b%");
    }

    #[test]
    fn exact_match_values_pass_through_untouched() {
        // No coercion and no wildcard handling on equality comparisons
        let filter = AdminFilter::from_query(query(&[("name", "50%")])).unwrap();
        let (sql, binds) = filter.to_select_sql();

        assert_eq!(sql, "SELECT * FROM admins WHERE name = $1 ORDER BY created_at");
        assert_eq!(binds, vec!["50%"]);
    }
}
