//! DuckDB-backed price source for CSV, Parquet and JSON exports.
//!
//! The file is exposed as a `prices` view with every column cast to the
//! record's types, so period filters run inside DuckDB.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use duckdb::Connection as DuckDbConnection;

use crate::error::{PriceError, Result};
use crate::models::{FuelPrices, PriceRecord};
use crate::source::PriceSource;
use crate::sql_builder::SqlBuilder;

const VIEW: &str = "prices";

const COLUMNS: [&str; 7] = [
    "\"State\"",
    "\"Period\"",
    "\"Region\"",
    "\"AGO\"",
    "\"PMS\"",
    "\"DPK\"",
    "\"LPG\"",
];

/// Reads records from a tabular file through an in-memory DuckDB database.
pub struct DuckDbSource {
    conn: Mutex<DuckDbConnection>,
    path: PathBuf,
}

impl DuckDbSource {
    /// Open `path` and register it as the `prices` view.
    ///
    /// The reader is chosen from the extension: `.csv`, `.parquet`, or
    /// `.json`/`.ndjson`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let path_str = path.to_string_lossy().replace('\\', "/").replace('\'', "''");
        let reader = match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => format!("read_csv_auto('{}')", path_str),
            Some("parquet") => format!("read_parquet('{}')", path_str),
            Some("json") | Some("ndjson") => format!("read_json_auto('{}')", path_str),
            other => {
                return Err(PriceError::InvalidArgument(format!(
                    "Unsupported price file extension: {:?}",
                    other
                )))
            }
        };

        let conn = DuckDbConnection::open_in_memory()?;
        conn.execute_batch(&format!(
            "CREATE OR REPLACE VIEW {} AS SELECT \
               CAST(\"State\" AS VARCHAR) AS \"State\", \
               CAST(\"Period\" AS VARCHAR) AS \"Period\", \
               CAST(\"Region\" AS VARCHAR) AS \"Region\", \
               CAST(\"AGO\" AS DOUBLE) AS \"AGO\", \
               CAST(\"PMS\" AS DOUBLE) AS \"PMS\", \
               CAST(\"DPK\" AS DOUBLE) AS \"DPK\", \
               CAST(\"LPG\" AS DOUBLE) AS \"LPG\" \
             FROM {}",
            VIEW, reader
        ))?;
        tracing::debug!(path = %path.display(), "registered DuckDB price view");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Records of the given regions, in file order.
    pub fn records_for_regions(&self, regions: &[&str]) -> Result<Vec<PriceRecord>> {
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&COLUMNS)
            .where_in("\"Region\"", regions)
            .build();
        self.query(&sql, &params)
    }

    /// Records whose state matches a SQL `LIKE` pattern, ignoring case.
    ///
    /// `"%o%"` matches every state containing an `o`; `"Lagos"` matches only Lagos.
    pub fn search_states(&self, pattern: &str) -> Result<Vec<PriceRecord>> {
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&COLUMNS)
            .where_like("\"State\"", pattern)
            .build();
        self.query(&sql, &params)
    }

    fn query(&self, sql: &str, params: &[String]) -> Result<Vec<PriceRecord>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| PriceError::InvalidArgument("DuckDB lock poisoned".into()))?;
        let mut stmt = conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;
        let mut out = Vec::new();

        while let Some(row) = rows.next()? {
            out.push(PriceRecord {
                state: row.get(0)?,
                period: row.get(1)?,
                region: row.get(2)?,
                prices: FuelPrices {
                    ago: row.get(3)?,
                    pms: row.get(4)?,
                    dpk: row.get(5)?,
                    lpg: row.get(6)?,
                },
            });
        }

        Ok(out)
    }
}

impl PriceSource for DuckDbSource {
    fn records(&self) -> Result<Vec<PriceRecord>> {
        let (sql, params) = SqlBuilder::new(VIEW).select(&COLUMNS).build();
        self.query(&sql, &params)
    }

    fn records_for_period(&self, period: &str) -> Result<Vec<PriceRecord>> {
        let (sql, params) = SqlBuilder::new(VIEW)
            .select(&COLUMNS)
            .where_eq("\"Period\"", period)
            .build();
        self.query(&sql, &params)
    }

    fn describe(&self) -> String {
        format!("duckdb({})", self.path.display())
    }
}
