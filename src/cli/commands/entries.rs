//! Terminal client for journal entries

use tracing::error;

use crate::cli::EntriesCommands;
use crate::clients::{ClientError, JournalClient, MutationOutcome, ViewState};
use crate::config::Config;
use crate::ui::{ERROR_PLACEHOLDER, EntryForm, render_card, render_list};

pub async fn cmd_entries(
    config: &Config,
    token: Option<String>,
    endpoint: Option<String>,
    command: EntriesCommands,
) -> anyhow::Result<()> {
    let endpoint = endpoint.unwrap_or_else(|| config.client.endpoint.clone());
    let token = token.or_else(|| config.client.token.clone());
    let client = JournalClient::new(&endpoint, token)?;
    let mut state = ViewState::new();

    match command {
        EntriesCommands::List => {
            show_list(&client, &mut state).await;
        }
        EntriesCommands::Show { id } => match client.movie_entry(&id).await {
            Ok(entry) => print!("{}", render_card(&entry)),
            Err(e) => query_failed("movieEntry", &e),
        },
        EntriesCommands::Search { title } => match client.search_movie_entries(&title).await {
            Ok(entries) => print!("{}", render_list(&entries)),
            Err(e) => query_failed("searchMovieEntries", &e),
        },
        EntriesCommands::Add {
            title,
            description,
            stars,
        } => {
            let form = EntryForm {
                title,
                description,
                stars,
            };
            // The server assigns the owner; the field only satisfies the input type.
            let input = match form.submit("") {
                Ok(input) => input,
                Err(e) => {
                    println!("Invalid {}: {}", e.field, e.message);
                    return Ok(());
                }
            };

            prefetch_list(&client, &mut state).await;
            let entry = client
                .create_movie_entry(&input)
                .await
                .map_err(|e| mutation_failed("create", &form, e))?;

            state.apply(&MutationOutcome::Created(entry));
            print_view(&state);
        }
        EntriesCommands::Edit {
            id,
            title,
            description,
            stars,
        } => {
            let existing = match client.movie_entry(&id).await {
                Ok(entry) => entry,
                Err(e) => {
                    query_failed("movieEntry", &e);
                    return Ok(());
                }
            };
            state.set_detail(existing.clone());

            let form = EntryForm::from_entry(&existing).with_overrides(title, description, stars);
            let input = match form.submit(&existing.user) {
                Ok(input) => input,
                Err(e) => {
                    println!("Invalid {}: {}", e.field, e.message);
                    return Ok(());
                }
            };

            prefetch_list(&client, &mut state).await;
            let updated = client
                .update_movie_entry(&id, &input)
                .await
                .map_err(|e| mutation_failed("update", &form, e))?;

            state.apply(&MutationOutcome::Updated(updated.into()));
            print_view(&state);
        }
        EntriesCommands::Delete { id } => {
            prefetch_list(&client, &mut state).await;
            let deleted = client.delete_movie_entry(&id).await.map_err(|e| {
                error!(entry_id = %id, code = ?e.code(), reason = ?e.reason(), "Delete failed: {e}");
                anyhow::anyhow!("Failed to delete entry {id}: {e}")
            })?;

            println!("Deleted \"{}\"", deleted.title);
            state.apply(&MutationOutcome::Deleted { id: deleted.id });
            print_view(&state);
        }
    }

    Ok(())
}

async fn show_list(client: &JournalClient, state: &mut ViewState) {
    match client.movie_entries().await {
        Ok(entries) => {
            state.set_list(entries);
            print_view(state);
        }
        Err(e) => query_failed("movieEntries", &e),
    }
}

/// Loads the list the mutation result is merged into; a failure only
/// means there is nothing cached to update.
async fn prefetch_list(client: &JournalClient, state: &mut ViewState) {
    if let Ok(entries) = client.movie_entries().await {
        state.set_list(entries);
    }
}

fn print_view(state: &ViewState) {
    if let Some(entries) = state.list() {
        print!("{}", render_list(entries));
    }
}

fn query_failed(operation: &str, err: &ClientError) {
    error!(
        operation,
        code = ?err.code(),
        reason = ?err.reason(),
        "Query failed: {err}"
    );
    println!("{ERROR_PLACEHOLDER}");
}

fn mutation_failed(action: &str, form: &EntryForm, err: ClientError) -> anyhow::Error {
    error!(
        code = ?err.code(),
        reason = ?err.reason(),
        "Failed to {action} movie entry: {err}"
    );
    println!(
        "Form kept: title={:?} description={:?} stars={}",
        form.title, form.description, form.stars
    );
    anyhow::anyhow!("Failed to {action} movie entry: {err}")
}
