use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mdp_action_value::{config::*, report, *};
use serde_json::json;
use std::{fs, path::Path, rc::Rc};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdp-q", version, about = "Action values and value iteration for tabular MDPs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run value iteration and print V*, pi* and Q*.
    Solve {
        /// MDP transition table (JSON).
        mdp: String,

        #[command(flatten)]
        solver: SolverArgs,
    },

    /// Evaluate a single Q(s,a) against a given value function.
    Q {
        /// MDP transition table (JSON).
        mdp: String,

        /// Value function as a JSON object of state -> value.
        #[arg(long)]
        values: String,

        #[arg(long)]
        state: Discrete,

        #[arg(long)]
        action: Discrete,

        #[arg(long, env = "MDP_GAMMA", default_value_t = DEFAULT_GAMMA)]
        gamma: Continous,
    },
}

#[derive(Args)]
struct SolverArgs {
    #[arg(long, env = "MDP_GAMMA", default_value_t = DEFAULT_GAMMA)]
    gamma: Continous,

    #[arg(long, default_value_t = DEFAULT_THETA)]
    theta: Continous,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
}

impl From<SolverArgs> for SolverConfig {
    fn from(args: SolverArgs) -> Self {
        Self {
            gamma: args.gamma,
            theta: args.theta,
            max_iterations: args.max_iterations,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out = match Cli::parse().command {
        Command::Solve { mdp, solver } => {
            let report = report::solve(&load_mdp(&mdp)?, &solver.into())?;
            serde_json::to_value(report)?
        }
        Command::Q {
            mdp,
            values,
            state,
            action,
            gamma,
        } => {
            SolverConfig {
                gamma,
                ..Default::default()
            }
            .validate()?;
            let mdp = load_mdp(&mdp)?;
            let v: ValueFunction<Discrete> = serde_json::from_str(&read(&values)?)
                .with_context(|| format!("Parsing value function '{values}'"))?;
            let q = compute_q(mdp.as_ref(), &v, &state, &action, gamma)?;
            json!({ "state": state, "action": action, "gamma": gamma, "q": q })
        }
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load_mdp(path: &str) -> Result<Rc<TabularMdp>> {
    let mdp = TabularMdp::from_json_str(&read(path)?)
        .with_context(|| format!("Loading MDP from '{path}'"))?;

    Ok(Rc::new(mdp))
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(Path::new(path)).map_err(|source| {
        Error::Io {
            operation: format!("read '{path}'"),
            source,
        }
        .into()
    })
}
