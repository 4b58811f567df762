use super::{CompiledQuery, QueryBuilder};
use crate::model::MatchFilter;

/// Compile a match listing query
///
/// Stadium and sport are independent equality constraints; unset or empty
/// fields add nothing. No ordering is applied.
pub fn compile_match_query(base: &str, filter: Option<&MatchFilter>) -> CompiledQuery {
    let Some(filter) = filter else {
        return CompiledQuery::bare(base);
    };

    let mut builder = QueryBuilder::new(base);

    if let Some(stadium) = filter.stadium() {
        builder.push_eq("stadium", stadium);
    }

    if let Some(sport) = filter.sport() {
        builder.push_eq("sport", sport);
    }

    builder.build()
}
