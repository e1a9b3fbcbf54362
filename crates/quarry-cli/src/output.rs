use anyhow::Result;
use quarry::{Catalog, CompiledStatement, ResolvedQuery};
use quarry_driver_postgresql::SearchResults;
use serde_json::{json, Value as Json};

pub(crate) fn print(value: &Json) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn catalog(catalog: &Catalog) -> Json {
    json!(catalog.entries())
}

pub(crate) fn query(query: &ResolvedQuery) -> Json {
    json!({
        "select": query.select_sql,
        "from": query.from_sql,
        "joins": query.join_sql,
        "where": query.where_sql,
        "group_by": query.group_by_sql,
        "order_by": query.order_by_sql,
        "limit": query.limit,
        "offset": query.offset,
        "sql": query.text(),
        "parameters": parameters(&query.statement()),
        "count": query.count.as_ref().map(|count| json!({
            "sql": count.text,
            "parameters": parameters(count),
        })),
    })
}

pub(crate) fn results(results: &SearchResults) -> Json {
    json!({
        "rows": results.rows,
        "total": results.total,
    })
}

fn parameters(statement: &CompiledStatement) -> Json {
    statement.parameters.iter().map(|value| value.to_json()).collect()
}
