//! CSV output format for monitor statistics
//!
//! One header row `operacion,tiempo,memoria` followed by one row per
//! recorded operation, in recording order.

/// CSV record for a single monitored operation
#[derive(Debug, Clone)]
pub struct CsvOperation {
    pub operation: String,
    pub elapsed_ms: f64,
    pub memory_kb: i64,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    operations: Vec<CsvOperation>,
}

impl CsvOutput {
    pub const HEADER: &'static str = "operacion,tiempo,memoria";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_operation(&mut self, operation: CsvOperation) {
        self.operations.push(operation);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_operation(operation: &CsvOperation) -> String {
        format!(
            "{},{:.3},{}",
            Self::escape_field(&operation.operation),
            operation.elapsed_ms,
            operation.memory_kb
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::HEADER);
        output.push('\n');

        for operation in &self.operations {
            output.push_str(&Self::format_operation(operation));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str, elapsed_ms: f64, memory_kb: i64) -> CsvOperation {
        CsvOperation {
            operation: name.to_string(),
            elapsed_ms,
            memory_kb,
        }
    }

    #[test]
    fn test_csv_header_only() {
        assert_eq!(CsvOutput::new().to_csv(), "operacion,tiempo,memoria\n");
    }

    #[test]
    fn test_csv_escape_field_simple() {
        assert_eq!(CsvOutput::escape_field("Crear datos"), "Crear datos");
    }

    #[test]
    fn test_csv_escape_field_with_comma() {
        assert_eq!(CsvOutput::escape_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_csv_escape_field_with_quote() {
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_rows_in_order() {
        let mut output = CsvOutput::new();
        output.add_operation(op("Crear datos", 12.5, 2048));
        output.add_operation(op("Mostrar resumen", 0.25, -4));

        let csv = output.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "operacion,tiempo,memoria",
                "Crear datos,12.500,2048",
                "Mostrar resumen,0.250,-4",
            ]
        );
    }
}
