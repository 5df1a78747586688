use std::path::PathBuf;

use foodgram::AppState;

pub async fn export(
    config: foodgram::config::Config,
    user_id: String,
    output: PathBuf,
) -> anyhow::Result<()> {
    let pool = foodgram::create_pool(&config.database.url, 1).await?;
    let state = AppState::new(config, pool.clone());

    let result = foodgram::shopping_list::export_to_file(&state, &user_id, &output).await;
    pool.close().await;

    let size = result?;
    tracing::info!("Shopping list written to {} ({} bytes)", output.display(), size);

    Ok(())
}
