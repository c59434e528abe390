use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Update the logged-in user's profile. Omitted fields keep their
    /// current values.
    Update {
        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Short biography
        #[arg(long)]
        bio: Option<String>,

        /// Subject offered (repeat the flag for more than one)
        #[arg(long = "can-teach")]
        can_teach: Option<Vec<String>>,

        /// Subject wanted (repeat the flag for more than one)
        #[arg(long = "want-to-learn")]
        want_to_learn: Option<Vec<String>>,
    },
}
