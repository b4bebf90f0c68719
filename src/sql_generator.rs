use super::{CsvTable, SqlType, StringRecord};

/// name of the common table expression wrapping the rows.
const CTE_NAME: &str = "data";

/// escapes a value for use inside a single-quoted sql string literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// renders one row as `SELECT CAST('<value>' AS <type>) AS <column>, ...`.
/// columns, types and the row's fields are zipped by position, so the caller has to make sure
/// they line up (`read_csv` rejects rows of the wrong length).
pub fn render_row(columns: &[String], types: &[SqlType], row: &StringRecord) -> String {
    let items: Vec<String> = columns
        .iter()
        .zip(types.iter())
        .zip(row.iter())
        .map(|((column, sql_type), value)| {
            format!("CAST('{}' AS {}) AS {}", escape_literal(value), sql_type, column)
        })
        .collect();

    format!("SELECT {}", items.join(", "))
}

/// generates a `with data as (...) select * from data;` query that reproduces every row
/// of the table.
pub fn generate_sql(table: &CsvTable, types: &[SqlType]) -> String {
    let selects: Vec<String> = table
        .rows
        .iter()
        .map(|row| format!("\t{}", render_row(&table.columns, types, row)))
        .collect();

    let mut sql = format!("WITH {} AS (\n", CTE_NAME);
    sql.push_str(&selects.join(" UNION ALL\n"));
    sql.push_str(&format!("\n)\nSELECT * FROM {};", CTE_NAME));

    sql
}
