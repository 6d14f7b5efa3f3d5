use anyhow::{Context, Result};
use atlas_api::{Client, models::Project};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Walks through the project lifecycle against a live Atlas organization.
#[derive(Debug, Parser)]
struct Args {
    /// Public part of the API key
    #[arg(long, env = "ATLAS_PUBLIC_KEY")]
    public_key: String,

    /// Private part of the API key
    #[arg(long, env = "ATLAS_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    /// Organization the demo project is created in
    #[arg(long, env = "ATLAS_ORG_ID")]
    org_id: String,

    /// Name of the project to create and delete again
    #[arg(long, default_value = "atlas-api-demo")]
    project_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = Client::with_digest_auth(args.public_key, args.private_key);

    let root = client.root().get().await.context("getting API root")?;
    println!(
        "Connected to {} ({})",
        root.value.app_name.unwrap_or_default(),
        root.value.build.unwrap_or_default()
    );

    let projects = print_projects(&client).await?;
    if let Some(first_id) = projects.first().and_then(|project| project.id.as_deref()) {
        let first = client
            .projects()
            .get(first_id)
            .await
            .context("getting first project")?;
        println!(
            "First project '{}' has {} cluster(s)",
            first.value.name.unwrap_or_default(),
            first.value.cluster_count.unwrap_or_default()
        );
    }

    println!("Creating project '{}'...", args.project_name);
    let created = client
        .projects()
        .create(&Project::new(&args.project_name, &args.org_id))
        .await
        .context("creating project")?
        .into_value();
    let project_id = created.id.context("created project has no id")?;

    let found = client
        .projects()
        .get_by_name(&args.project_name)
        .await
        .context("getting project by name")?;
    println!(
        "Found project '{}' with id {}",
        args.project_name,
        found.value.id.unwrap_or_default()
    );

    let clusters = client
        .clusters()
        .list(&project_id)
        .await
        .context("listing clusters")?;
    println!("Project has {} cluster(s)", clusters.value.len());

    println!("Deleting project '{}'...", args.project_name);
    client
        .projects()
        .delete(&project_id)
        .await
        .context("deleting project")?;

    print_projects(&client).await?;

    Ok(())
}

async fn print_projects(client: &Client) -> Result<Vec<Project>> {
    let projects = client
        .projects()
        .list()
        .await
        .context("listing projects")?
        .into_value();

    println!("Projects ({}):", projects.total_count);
    for project in projects.iter() {
        println!(
            "{} \t{}",
            project.id.as_deref().unwrap_or_default(),
            project.name.as_deref().unwrap_or_default()
        );
    }

    Ok(projects.results)
}
