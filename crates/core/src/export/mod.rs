//! Backup export module.

mod csv_export;

// Re-export the public interface
pub use csv_export::{backup_file_name, export_items_csv, export_owner_backup, BACKUP_CSV_HEADERS};
