use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration file and an initialized database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // The database path init_all resolved to
    let db_path = match &cli.db {
        Some(name) => {
            let p = std::path::Path::new(name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                Config::config_dir().join(p)
            }
        }
        None => Config::database_file(),
    };

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;
    db::log::record(&pool.conn, "init", "", "Database initialized")?;

    success("Database schema ready.");
    Ok(())
}
