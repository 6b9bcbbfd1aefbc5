use crate::cli::parser::{Commands, UserCommand};
use crate::config::Config;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            UserCommand::Add { username } => {
                let user = db::users::insert_user(&pool.conn, username)?;
                db::log::record(
                    &pool.conn,
                    "user-add",
                    &user.username,
                    "User registered",
                )?;
                success(format!("User '{}' registered.", user.username));
            }

            UserCommand::List => {
                let users = db::users::load_all(&pool.conn)?;
                if users.is_empty() {
                    info("No users registered yet.");
                    return Ok(());
                }

                let mut table =
                    Table::new(vec![Column::new("Username"), Column::new("Since")]);
                for u in &users {
                    table.add_row(vec![u.username.clone(), u.created_at.clone()]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
