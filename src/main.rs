use clap::Parser;
use darkwrite::application::{init::init, ComposeService, ConfigService, Draft, Revision};
use darkwrite::application::{PostListing, PostRepository};
use darkwrite::cli::{format_post_detail, format_post_list, format_tag_list, Cli, Commands};
use darkwrite::domain::{
    collect_tags, generate_excerpt, PostFilter, PostId, StatusFilter, DEFAULT_EXCERPT_LENGTH,
};
use darkwrite::error::{DarkwriteError, Result};
use darkwrite::infrastructure::{Config, FileStore, Workspace};
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() {
    darkwrite::logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open() -> Result<(Config, PostRepository<FileStore>)> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let repository = PostRepository::open(&workspace, &config);
    Ok((config, repository))
}

fn read_body(content: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
    match (content, file) {
        (Some(content), _) => Ok(Some(content)),
        (None, Some(path)) => Ok(Some(fs::read_to_string(path)?)),
        (None, None) => Ok(None),
    }
}

fn report_load_error(load_error: Option<&DarkwriteError>) {
    if let Some(e) = load_error {
        eprintln!("Warning: {}", e);
    }
}

/// Report a degraded listing on stderr and hand back whatever was loaded
fn warn_if_degraded(listing: PostListing) -> PostListing {
    report_load_error(listing.load_error.as_ref());
    listing
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized darkwrite blog at {}", path.display());
            Ok(())
        }
        Commands::New {
            title,
            body,
            tags,
            cover,
            publish,
        } => {
            let (config, repository) = open()?;
            let content = read_body(body.content, body.file.as_deref())?.unwrap_or_default();

            let service = ComposeService::new(&repository, config.excerpt_length);
            let post = service
                .create(
                    Draft {
                        title,
                        content,
                        tags,
                        cover_image: cover,
                    },
                    publish,
                )
                .await?;

            println!("Created post {}", post.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            body,
            tags,
            clear_tags,
            cover,
            no_cover,
        } => {
            let (config, repository) = open()?;
            let content = read_body(body.content, body.file.as_deref())?;

            let tags = if clear_tags {
                Some(Vec::new())
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let cover_image = if no_cover { Some(None) } else { cover.map(Some) };

            let service = ComposeService::new(&repository, config.excerpt_length);
            let post = service
                .revise(
                    &PostId::from(id),
                    Revision {
                        title,
                        content,
                        tags,
                        cover_image,
                    },
                )
                .await?;

            println!("Updated post {}", post.id);
            Ok(())
        }
        Commands::List {
            published,
            drafts,
            search,
            tags,
        } => {
            let (_, repository) = open()?;

            let status = if published {
                StatusFilter::Published
            } else if drafts {
                StatusFilter::Drafts
            } else {
                StatusFilter::All
            };
            let mut filter = PostFilter::new().with_status(status);
            if let Some(text) = search {
                filter = filter.with_text(text);
            }
            for tag in tags {
                filter = filter.with_tag(tag);
            }

            let listing = warn_if_degraded(repository.list_all().await);
            print!("{}", format_post_list(&filter.apply(listing.posts)));
            Ok(())
        }
        Commands::Show { id } => {
            let (_, repository) = open()?;
            let id = PostId::from(id);

            let lookup = repository.get_by_id(&id).await;
            report_load_error(lookup.load_error.as_ref());

            match lookup.post {
                Some(post) => {
                    print!("{}", format_post_detail(&post));
                    Ok(())
                }
                None => Err(DarkwriteError::NotFound(id)),
            }
        }
        Commands::Delete { id } => {
            let (_, repository) = open()?;
            let id = PostId::from(id);

            repository.delete(&id).await?;
            println!("Deleted post {}", id);
            Ok(())
        }
        Commands::Publish { id } => {
            let (_, repository) = open()?;

            let post = repository.toggle_publish(&PostId::from(id)).await?;
            if post.published {
                println!("Published post {}", post.id);
            } else {
                println!("Unpublished post {}", post.id);
            }
            Ok(())
        }
        Commands::Tags { published } => {
            let (_, repository) = open()?;

            let listing = if published {
                repository.list_published().await
            } else {
                repository.list_all().await
            };
            let listing = warn_if_degraded(listing);
            print!("{}", format_tag_list(&collect_tags(&listing.posts)));
            Ok(())
        }
        Commands::Excerpt { content, length } => {
            // Works outside a workspace too; the configured length is a default only.
            let length = length.unwrap_or_else(|| {
                Workspace::discover()
                    .and_then(|ws| ws.load_config())
                    .map(|config| config.excerpt_length)
                    .unwrap_or(DEFAULT_EXCERPT_LENGTH)
            });
            println!("{}", generate_excerpt(&content, length));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("excerpt_length = {}", config.excerpt_length);
                println!("read_delay_ms = {}", config.read_delay_ms);
                println!("write_delay_ms = {}", config.write_delay_ms);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: darkwrite config [--list | <key> [<value>]]");
                println!("Valid keys: excerpt_length, read_delay_ms, write_delay_ms, created");
                Ok(())
            }
        }
    }
}
