use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Create a new post
    Create {
        /// Post title
        #[arg(long, short)]
        title: String,

        /// Post body
        #[arg(long, short)]
        body: String,

        /// Author id (defaults to default_author from config)
        #[arg(long, short)]
        author: Option<String>,

        /// Storage reference of the post image
        #[arg(long)]
        image: Option<String>,
    },

    /// List posts, newest first
    List,

    /// Show a post with its comments
    Show {
        /// Post ID
        id: String,
    },
}
