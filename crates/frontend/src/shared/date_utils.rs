/// Utilities for date and time formatting
///
/// Provides consistent pt-BR date/time formatting across the application
use chrono::NaiveDateTime;

/// Format a scheduled time as DD/MM/YYYY HH:MM:SS
/// Example: 2025-03-15T14:02:26 -> "15/03/2025 14:02:26"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M:%S").to_string()
}
