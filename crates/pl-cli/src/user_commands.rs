use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Get a user by id
    Get {
        /// User id (UUID)
        id: String,
    },
}
