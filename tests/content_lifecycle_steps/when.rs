//! When steps for content lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::{ContentWorld, run_async};
use eyre::WrapErr;
use missive::content::{
    codec::{LogReplay, ReplayOutcome, frame_record},
    domain::{FormattedText, MessageContent},
    merge::{MergeContext, merge_contents},
    secret_media::SecretMediaLoader,
};
use rstest_bdd_macros::when;

fn stored(world: &ContentWorld) -> Result<&MessageContent, eyre::Report> {
    world
        .stored
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored content in scenario world"))
}

#[when(r#"a server copy with caption "{caption}" arrives"#)]
fn server_copy_arrives(world: &mut ContentWorld, caption: String) -> Result<(), eyre::Report> {
    let old = stored(world)?;
    let mut incoming = old.clone();
    if let MessageContent::Photo(photo) = &mut incoming {
        photo.caption = FormattedText::plain(caption);
    }

    let ctx = MergeContext::new(ContentWorld::dialog(), true, &world.files, &world.options);
    let outcome = merge_contents(old, incoming, &ctx);

    world.content_changed = outcome.content_changed;
    world.needs_update = outcome.needs_update;
    world.current = Some(outcome.content);
    Ok(())
}

#[when("the content expires")]
fn content_expires(world: &mut ContentWorld) -> Result<(), eyre::Report> {
    let expired = stored(world)?.clone().expire();
    world.current = Some(expired);
    Ok(())
}

#[when("the content is written to the log and replayed")]
fn write_and_replay(world: &mut ContentWorld) -> Result<(), eyre::Report> {
    let mut log = Vec::new();
    frame_record(stored(world)?, &mut log).wrap_err("frame stored content")?;

    let first = LogReplay::new(log.as_slice())
        .next()
        .ok_or_else(|| eyre::eyre!("replay produced no records"))?
        .wrap_err("replay log")?;
    match first {
        ReplayOutcome::Parsed(content) => world.replayed = Some(content),
        ReplayOutcome::Corrupt { index, error } => {
            return Err(eyre::eyre!("record {index} replayed as corrupt: {error}"));
        }
    }
    Ok(())
}

#[when("the secret media is loaded")]
fn secret_media_loaded(world: &mut ContentWorld) -> Result<(), eyre::Report> {
    let (pending, barrier) = world
        .pending_secret
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending secret media in scenario world"))?;
    let payloads = world
        .payloads
        .take()
        .ok_or_else(|| eyre::eyre!("missing secret payload loader in scenario world"))?;
    let loader = SecretMediaLoader::new(Arc::new(payloads));

    let result = run_async(loader.finalize(pending, barrier));
    if let Ok(content) = &result {
        world.current = Some(content.clone());
    }
    world.secret_result = Some(result);
    Ok(())
}
