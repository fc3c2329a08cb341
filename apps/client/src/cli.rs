//! # Command line front end
//!
//! Each sub-command maps onto one view operation. [`execute`] returns the
//! text to print on stdout; errors are reported by the binary.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use newsroom_domain::{
    comment::{Comment, CommentId},
    notification::Notification,
    post::{EditAction, Post, PostId},
    session::Session,
};

use crate::{
    error::AppError,
    state::AppState,
    view::{login, my_posts, notifications, post_detail, post_editor, post_list, review},
};

#[derive(Debug, Parser)]
#[command(name = "newsroom", version, about = "Newsroom article client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a session
    Login {
        username: String,
        /// `redacteur` or `gebruiker`
        role:     String,
    },
    /// End the session
    Logout,
    /// Show the current session
    Whoami,
    /// List published posts
    Posts(PostsArgs),
    /// Show a post with its comments
    Show { id: PostId },
    #[command(subcommand)]
    Comment(CommentCommand),
    /// List your own posts
    MyPosts,
    /// Write a new post
    Create(ContentArgs),
    /// Open one of your posts, or save it when `--title` and `--content` are given
    Edit {
        id:      PostId,
        #[arg(long, requires = "content")]
        title:   Option<String>,
        #[arg(long, requires = "title")]
        content: Option<String>,
        /// Submit for review instead of saving as draft
        #[arg(long)]
        submit:  bool,
    },
    #[command(subcommand)]
    Review(ReviewCommand),
    /// List notifications about your posts
    Notifications,
}

#[derive(Debug, Args)]
pub struct PostsArgs {
    /// Substring of the post body
    #[arg(long, default_value = "")]
    pub content: String,
    #[arg(long, default_value = "")]
    pub author:  String,
    /// First day, `YYYY-MM-DD`
    #[arg(long)]
    pub from:    Option<NaiveDate>,
    /// Last day, `YYYY-MM-DD`
    #[arg(long)]
    pub to:      Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct ContentArgs {
    #[arg(long)]
    pub title:   String,
    #[arg(long)]
    pub content: String,
    /// Submit for review instead of saving as draft
    #[arg(long)]
    pub submit:  bool,
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    Add { post: PostId, text: String },
    Edit { post: PostId, id: CommentId, text: String },
    Delete { post: PostId, id: CommentId },
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Submitted posts waiting for review
    List,
    Show { id: PostId },
    Accept { id: PostId },
    Reject {
        id:     PostId,
        #[arg(long)]
        reason: String,
    },
}

fn edit_action(submit: bool) -> EditAction {
    if submit {
        EditAction::Submit
    } else {
        EditAction::SaveDraft
    }
}

/// Runs one command and renders its result
pub async fn execute(state: &AppState, command: Command) -> Result<String, AppError> {
    let output = match command {
        Command::Login { username, role } => {
            let session = login::login(state, &username, &role)?;
            format!("{}\n-> {}", render_session(&session), login::AFTER_LOGIN)
        }
        Command::Logout => format!("logged out\n-> {}", login::logout(state)?),
        Command::Whoami => match login::whoami(state) {
            Some(session) => render_session(&session),
            None => "not logged in".to_string(),
        },
        Command::Posts(args) => {
            let query = post_list::PostListQuery {
                content: args.content,
                author:  args.author,
                from:    args.from,
                to:      args.to,
            };
            render_posts(&post_list::list_published(state, &query).await?)
        }
        Command::Show { id } => {
            let detail = post_detail::load(state, id).await?;
            let mut lines = vec![render_post_full(&detail.post)];
            lines.extend(detail.comments.iter().map(render_comment));
            lines.join("\n")
        }
        Command::Comment(CommentCommand::Add { post, text }) => {
            render_comment(&post_detail::add_comment(state, post, &text).await?)
        }
        Command::Comment(CommentCommand::Edit { post, id, text }) => {
            render_comment(&post_detail::edit_comment(state, post, id, &text).await?)
        }
        Command::Comment(CommentCommand::Delete { post, id }) => {
            post_detail::delete_comment(state, post, id).await?;
            format!("comment {id} deleted")
        }
        Command::MyPosts => render_posts(&my_posts::list(state).await?),
        Command::Create(args) => {
            let post =
                post_editor::create(state, &args.title, &args.content, edit_action(args.submit))
                    .await?;
            format!("{}\n-> {}", render_post(&post), post_editor::AFTER_SAVE)
        }
        Command::Edit {
            id,
            title: Some(title),
            content: Some(content),
            submit,
        } => {
            let post = post_editor::save(state, id, &title, &content, edit_action(submit)).await?;
            format!("{}\n-> {}", render_post(&post), post_editor::AFTER_SAVE)
        }
        Command::Edit { id, .. } => {
            let form = post_editor::open(state, id).await?;
            let mut text = render_post_full(&form.post);
            if let Some(reason) = form.review_reason {
                text.push_str(&format!("\nrejected: {reason}"));
            }
            text
        }
        Command::Review(ReviewCommand::List) => render_posts(&review::list(state).await?),
        Command::Review(ReviewCommand::Show { id }) => {
            render_post_full(&review::show(state, id).await?)
        }
        Command::Review(ReviewCommand::Accept { id }) => {
            let post = review::accept(state, id).await?;
            format!("{}\n-> {}", render_post(&post), review::AFTER_DECISION)
        }
        Command::Review(ReviewCommand::Reject { id, reason }) => {
            let post = review::reject(state, id, &reason).await?;
            format!("{}\n-> {}", render_post(&post), review::AFTER_DECISION)
        }
        Command::Notifications => notifications::list(state)
            .await?
            .iter()
            .map(render_notification)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

fn render_session(session: &Session) -> String {
    format!("{} ({})", session.username(), session.role())
}

fn render_post(post: &Post) -> String {
    format!(
        "#{} [{}] {} by {} on {}",
        post.id(),
        post.status(),
        post.title(),
        post.author(),
        post.creation_date().format("%Y-%m-%d %H:%M")
    )
}

fn render_post_full(post: &Post) -> String {
    format!("{}\n\n{}\n", render_post(post), post.content())
}

fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "no posts".to_string();
    }
    posts.iter().map(render_post).collect::<Vec<_>>().join("\n")
}

fn render_comment(comment: &Comment) -> String {
    format!("  [{}] {}: {}", comment.id(), comment.author(), comment.content())
}

fn render_notification(notification: &Notification) -> String {
    format!("{} (from {})", notification.message(), notification.author())
}
