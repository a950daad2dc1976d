use anyhow::{anyhow, bail, Context};
use paged_list_api::{PageRequest, PagedList};
use paged_list_db::models::person::PersonModel;
use paged_list_db::repository::{CountAll, CreateBatch, LoadPage, PagingStrategy};
use paged_list_sqlite::repository::db_init::reset_database;
use paged_list_sqlite::{PersonRepositoryImpl, SqliteRepositories};
use std::time::Instant;

use crate::config::BenchConfig;
use crate::hydrator::Hydrator;
use crate::report::StrategyResult;

/// Populate a fresh collection and time every configured strategy
///
/// Fails when a strategy returns a page whose subset disagrees with its own
/// count, or a page different from the one the first strategy returned.
pub async fn run(config: &BenchConfig) -> anyhow::Result<Vec<StrategyResult>> {
    let request = config.page_request()?;
    if config.strategies.contains(&PagingStrategy::Concurrent) && config.max_connections < 2 {
        log::warn!("concurrent strategy with a single connection runs its reads back to back");
    }

    let repos = SqliteRepositories::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to open {}", config.database_url))?;
    let person_repo = repos.person_repository();

    populate(&repos, &person_repo, config).await?;

    let mut results = Vec::with_capacity(config.strategies.len());
    let mut reference: Option<PagedList<PersonModel>> = None;

    for &strategy in &config.strategies {
        let (result, page) = time_strategy(&person_repo, request, strategy, config).await?;

        if reference.is_none() {
            reference = Some(page);
        } else if reference.as_ref() != Some(&page) {
            bail!("{strategy} returned a different page than {}", config.strategies[0]);
        }

        log::info!("{strategy}: {:.3} ms mean", result.mean_ms());
        results.push(result);
    }

    repos.close().await;
    Ok(results)
}

async fn populate(
    repos: &SqliteRepositories,
    person_repo: &PersonRepositoryImpl,
    config: &BenchConfig,
) -> anyhow::Result<()> {
    reset_database(repos.pool()).await?;

    let people = Hydrator::new(config.seed).hydrate_many(config.people);
    let started = Instant::now();
    person_repo
        .create_batch(people)
        .await
        .map_err(|e| anyhow!(e))
        .context("failed to insert people")?;

    let stored = person_repo.count_all().await.map_err(|e| anyhow!(e))?;
    log::info!(
        "inserted {stored} people in {:.1} ms",
        started.elapsed().as_secs_f64() * 1e3
    );
    Ok(())
}

async fn time_strategy(
    person_repo: &PersonRepositoryImpl,
    request: PageRequest,
    strategy: PagingStrategy,
    config: &BenchConfig,
) -> anyhow::Result<(StrategyResult, PagedList<PersonModel>)> {
    for _ in 0..config.warmup {
        load(person_repo, request, strategy).await?;
    }

    let mut last_page = None;
    let mut durations = Vec::with_capacity(config.iterations as usize);
    for _ in 0..config.iterations {
        let started = Instant::now();
        let page = load(person_repo, request, strategy).await?;
        durations.push(started.elapsed());

        page.verify()
            .with_context(|| format!("{strategy} produced an inconsistent page"))?;
        last_page = Some(page);
    }

    let page = last_page.ok_or_else(|| anyhow!("no timed iterations for {strategy}"))?;
    let mut result = StrategyResult::new(strategy, *page.metadata(), page.len());
    for elapsed in durations {
        result.add_sample(elapsed);
    }
    Ok((result, page))
}

async fn load(
    person_repo: &PersonRepositoryImpl,
    request: PageRequest,
    strategy: PagingStrategy,
) -> anyhow::Result<PagedList<PersonModel>> {
    person_repo
        .load_page(request, strategy)
        .await
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("{strategy} failed to load page {}", request.page_number()))
}
