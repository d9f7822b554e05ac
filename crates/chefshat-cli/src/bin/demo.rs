//! chefshat-demo: one decision round across participant variants
//!
//! Spawns a random participant behind its own bridge server, reaches it
//! through a `RemoteAgent`, seats two local random participants and a Unity
//! seat, and drives the calls an engine would: a decision for each seat,
//! the notification fan-out, and a reward query. Without a Unity client
//! listening on port 8000 the Unity seat degrades to the zero vector, which
//! is itself part of the demonstration.

use anyhow::Result;
use chefshat_agents::RandomAgent;
use chefshat_bridge::HostedAgent;
use chefshat_core::action::PASS;
use chefshat_core::{Agent, EnvInfo, Observation};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use unity_bridge::UnityAgent;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // One participant lives behind the bridge, addressed exactly like a
    // separate process would be.
    let hosted = HostedAgent::spawn(RandomAgent::new("Hosted"), "127.0.0.1:0").await?;
    let remote = hosted.remote("Bridge");

    let mut seats: Vec<Box<dyn Agent>> = vec![
        Box::new(UnityAgent::new("Unity")),
        Box::new(remote),
        Box::new(RandomAgent::new("Local1")),
        Box::new(RandomAgent::new("Local2")),
    ];

    // A hand of three 5s and a joker. Legal: the single (30), the single
    // plus joker (31), the pair (33), and pass.
    let observation = Observation::from_parts(&[], &[5, 5, 5, 12], &[30, 31, 33, PASS])?;
    let after = Observation::from_parts(&[5], &[5, 5, 12], &[PASS])?;
    let info = EnvInfo::default();

    for agent in seats.iter_mut() {
        let action = agent.get_action(&observation).await;
        info!("{} chose action index {:?}", agent.name(), action.action_index());
        agent.action_update(&observation, &after, &action, &info).await;
    }

    for agent in seats.iter_mut() {
        agent.observe_others(&info).await;
        agent.match_update(&info).await;
        let reward = agent.get_reward(&info, &observation, &after).await;
        info!("{} reward {}", agent.name(), reward);
    }

    hosted.shutdown();
    Ok(())
}
