use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::Level;
use uuid::Uuid;

use vertex_client::BpmnClient;
use vertex_types::{CorrelateMessageRequest, StartProcessRequest, Variables};

#[derive(Parser)]
#[command(name = "vertex", about = "Command-line client for the VertexBPMN engine", version)]
struct Cli {
    /// Engine base address (defaults to VERTEX_API_BASE or the local engine)
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy a BPMN model file
    Deploy {
        /// Path to the .bpmn model file
        file: String,
        /// Tenant to scope the deployment to
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Start a process instance by definition key
    Start(StartArgs),
    /// Query the status of a process instance
    Status {
        /// Process instance id
        instance_id: Uuid,
    },
    /// Inspect and control process instances
    #[command(subcommand)]
    Instance(InstanceCommand),
    /// Inspect deployed process definitions
    #[command(subcommand)]
    Definition(DefinitionCommand),
    /// Work with user tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Show the audit trail of a process instance
    History {
        /// Process instance id
        instance_id: Uuid,
    },
    /// List incidents recorded by the engine
    Incidents,
    /// Show the variables of a process instance
    Variables {
        /// Process instance id
        instance_id: Uuid,
    },
    /// Correlate a message
    Message {
        /// Message name
        name: String,
        /// Restrict correlation to one instance
        #[arg(long)]
        instance: Option<Uuid>,
        /// Variable in k=v form; v is parsed as JSON when possible
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },
    /// Broadcast a signal
    Signal {
        /// Signal name
        name: String,
        /// Variable in k=v form; v is parsed as JSON when possible
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },
    /// Probe engine health
    Health,
    /// Show engine metrics
    Metrics,
}

#[derive(Args)]
struct StartArgs {
    /// Process definition key (from a prior deploy)
    key: String,
    /// Variable in k=v form; v is parsed as JSON when possible
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,
    /// Business key to attach to the instance
    #[arg(long)]
    business_key: Option<String>,
    /// Tenant to start the instance under
    #[arg(long)]
    tenant: Option<String>,
}

#[derive(Subcommand)]
enum InstanceCommand {
    /// List instances
    List {
        /// Filter by process definition id
        #[arg(long)]
        definition: Option<Uuid>,
        /// Filter by tenant
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Fetch a single instance
    Get { id: Uuid },
    /// Suspend a running instance
    Suspend { id: Uuid },
    /// Resume a suspended instance
    Resume { id: Uuid },
    /// Delete an instance
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum DefinitionCommand {
    /// List deployed definitions
    List {
        /// Filter by definition key
        #[arg(long)]
        key: Option<String>,
        /// Filter by tenant
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Fetch a single definition
    Get { id: Uuid },
    /// Delete a deployed definition
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// List tasks
    List {
        /// Filter by process instance id
        #[arg(long)]
        instance: Option<Uuid>,
        /// Filter by assignee
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Fetch a single task
    Get { id: Uuid },
    /// Claim a task for a user
    Claim { id: Uuid, user: String },
    /// Complete a task, optionally submitting variables
    Complete {
        id: Uuid,
        /// Variable in k=v form; v is parsed as JSON when possible
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },
    /// Delegate a task to another user
    Delegate { id: Uuid, user: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = match &cli.base {
        Some(base) => BpmnClient::new(base)?,
        None => BpmnClient::from_env()?,
    };
    run(&client, cli.command).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

async fn run(client: &BpmnClient, command: Command) -> Result<()> {
    match command {
        Command::Deploy { file, tenant } => {
            let definition = client.deploy_process_for_tenant(&file, tenant.as_deref()).await?;
            print_json(&definition)
        }
        Command::Start(args) => {
            let request = StartProcessRequest {
                process_definition_key: args.key,
                variables: optional_variables(&args.vars)?,
                business_key: args.business_key,
                tenant_id: args.tenant,
            };
            let instance = client.start_process_with(request).await?;
            print_json(&instance)
        }
        Command::Status { instance_id } => {
            let status = client.get_process_status(instance_id).await?;
            println!("Status: {}", status);
            Ok(())
        }
        Command::Instance(cmd) => run_instance(client, cmd).await,
        Command::Definition(cmd) => run_definition(client, cmd).await,
        Command::Task(cmd) => run_task(client, cmd).await,
        Command::History { instance_id } => print_json(&client.list_history(instance_id).await?),
        Command::Incidents => print_json(&client.list_incidents().await?),
        Command::Variables { instance_id } => print_json(&client.get_variables(instance_id).await?),
        Command::Message { name, instance, vars } => {
            let request = CorrelateMessageRequest {
                message_name: name,
                process_instance_id: instance.map(|id| id.to_string()),
                variables: optional_variables(&vars)?,
            };
            print_json(&client.correlate_message(request).await?)
        }
        Command::Signal { name, vars } => {
            client.broadcast_signal(&name, optional_variables(&vars)?).await?;
            println!("Signal '{}' broadcast", name);
            Ok(())
        }
        Command::Health => print_json(&client.health().await?),
        Command::Metrics => print_json(&client.metrics().await?),
    }
}

async fn run_instance(client: &BpmnClient, command: InstanceCommand) -> Result<()> {
    match command {
        InstanceCommand::List { definition, tenant } => {
            print_json(&client.list_instances(definition, tenant.as_deref()).await?)
        }
        InstanceCommand::Get { id } => print_json(&client.get_instance(id).await?),
        InstanceCommand::Suspend { id } => {
            client.suspend_instance(id).await?;
            println!("Instance {} suspended", id);
            Ok(())
        }
        InstanceCommand::Resume { id } => {
            client.resume_instance(id).await?;
            println!("Instance {} resumed", id);
            Ok(())
        }
        InstanceCommand::Delete { id } => {
            client.delete_instance(id).await?;
            println!("Instance {} deleted", id);
            Ok(())
        }
    }
}

async fn run_definition(client: &BpmnClient, command: DefinitionCommand) -> Result<()> {
    match command {
        DefinitionCommand::List { key, tenant } => {
            print_json(&client.list_definitions(key.as_deref(), tenant.as_deref()).await?)
        }
        DefinitionCommand::Get { id } => print_json(&client.get_definition(id).await?),
        DefinitionCommand::Delete { id } => {
            client.delete_definition(id).await?;
            println!("Definition {} deleted", id);
            Ok(())
        }
    }
}

async fn run_task(client: &BpmnClient, command: TaskCommand) -> Result<()> {
    match command {
        TaskCommand::List { instance, assignee } => {
            print_json(&client.list_tasks(instance, assignee.as_deref()).await?)
        }
        TaskCommand::Get { id } => print_json(&client.get_task(id).await?),
        TaskCommand::Claim { id, user } => {
            client.claim_task(id, &user).await?;
            println!("Task {} claimed by {}", id, user);
            Ok(())
        }
        TaskCommand::Complete { id, vars } => {
            client.complete_task(id, optional_variables(&vars)?).await?;
            println!("Task {} completed", id);
            Ok(())
        }
        TaskCommand::Delegate { id, user } => {
            client.delegate_task(id, &user).await?;
            println!("Task {} delegated to {}", id, user);
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse repeated `k=v` flags into a variables object, or `None` when no
/// flags were given.
fn optional_variables(pairs: &[String]) -> Result<Option<Variables>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_variables(pairs)?))
}

/// Parse `k=v` pairs into process variables. Values that parse as JSON keep
/// their type (numbers, booleans, objects); everything else is a string.
fn parse_variables(pairs: &[String]) -> Result<Variables> {
    let mut variables = Variables::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .with_context(|| format!("invalid variable '{}'; expected KEY=VALUE", pair))?;
        anyhow::ensure!(!key.is_empty(), "invalid variable '{}': empty key", pair);
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        variables.insert(key.to_string(), value);
    }
    Ok(variables)
}
