use crate::profile_commands::ProfileCommands;
use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Register {
        /// Email address (login key, stored lowercased)
        #[arg(long)]
        email: String,

        /// Password, at least 6 characters
        #[arg(long)]
        password: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,
    },

    /// Log in with an existing account
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Drop the current session
    Logout,

    /// Show the current session state and identity
    Whoami,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// User directory operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Connect with another user
    Connect {
        /// Id of the user to connect with
        target_id: String,
    },
}
