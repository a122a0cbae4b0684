use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Comment on a post
    Add {
        /// Post ID
        post_id: String,

        /// Comment text
        #[arg(long, short)]
        body: String,

        /// Author id (defaults to default_author from config)
        #[arg(long, short)]
        author: Option<String>,

        /// Display name shown with the comment (defaults to the author id)
        #[arg(long)]
        author_name: Option<String>,
    },

    /// List comments on a post, oldest first
    List {
        /// Post ID
        post_id: String,
    },
}
