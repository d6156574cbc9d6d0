//! Dynamic `WHERE` clause construction shared by the list queries.
//!
//! Repositories build the clause text here and then bind the values in the
//! same order they pushed the conditions.

/// `AND`-joined conditions with sequential `$n` placeholders.
pub(crate) struct Conditions {
    clauses: Vec<String>,
    next_idx: u32,
}

impl Conditions {
    pub(crate) fn new() -> Self {
        Self {
            clauses: Vec::new(),
            next_idx: 1,
        }
    }

    /// Push a condition that needs one bound value. `build` receives the
    /// placeholder (`$1`, `$2`, ...) and may reference it more than once.
    pub(crate) fn bound(&mut self, build: impl FnOnce(&str) -> String) {
        let placeholder = format!("${}", self.next_idx);
        self.next_idx += 1;
        self.clauses.push(build(&placeholder));
    }

    /// Push a condition with no bound value.
    pub(crate) fn fixed(&mut self, clause: &str) {
        self.clauses.push(clause.to_string());
    }

    /// Render as ` WHERE a AND b`, or an empty string when nothing was pushed.
    pub(crate) fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wrap a search term for a case-insensitive substring match.
pub(crate) fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Trim a string filter, treating blank values as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conditions_render_nothing() {
        assert_eq!(Conditions::new().where_clause(), "");
    }

    #[test]
    fn placeholders_are_sequential_and_fixed_clauses_skip_numbers() {
        let mut c = Conditions::new();
        c.bound(|p| format!("a = {p}"));
        c.fixed("b IS NULL");
        c.bound(|p| format!("(c ILIKE {p} OR d ILIKE {p})"));
        assert_eq!(
            c.where_clause(),
            " WHERE a = $1 AND b IS NULL AND (c ILIKE $2 OR d ILIKE $2)"
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%_pure\\"), "100\\%\\_pure\\\\");
        assert_eq!(contains_pattern("Rumtek"), "%Rumtek%");
    }

    #[test]
    fn blank_filters_are_absent() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("   ".into())), None);
        assert_eq!(non_blank(&Some(" East Sikkim ".into())), Some("East Sikkim".into()));
    }
}
