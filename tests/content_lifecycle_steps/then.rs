//! Then steps for content lifecycle BDD scenarios.

use super::world::ContentWorld;
use missive::content::{domain::MessageContent, error::SecretMediaError, ports::FileRegistry};
use rstest_bdd_macros::then;

fn current(world: &ContentWorld) -> Result<&MessageContent, eyre::Report> {
    world
        .current
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current content in scenario world"))
}

#[then("the content is reported as edited")]
fn content_reported_as_edited(world: &ContentWorld) -> Result<(), eyre::Report> {
    if !world.content_changed || !world.needs_update {
        return Err(eyre::eyre!(
            "expected an edit, got content_changed={} needs_update={}",
            world.content_changed,
            world.needs_update
        ));
    }
    Ok(())
}

#[then("nothing is reported as changed")]
fn nothing_reported_as_changed(world: &ContentWorld) -> Result<(), eyre::Report> {
    if world.content_changed || world.needs_update {
        return Err(eyre::eyre!(
            "expected no change, got content_changed={} needs_update={}",
            world.content_changed,
            world.needs_update
        ));
    }
    if world.current != world.stored {
        return Err(eyre::eyre!("merged content differs from stored content"));
    }
    Ok(())
}

#[then(r#"the caption reads "{caption}""#)]
fn caption_reads(world: &ContentWorld, caption: String) -> Result<(), eyre::Report> {
    let actual = current(world)?
        .caption()
        .map(|text| text.text.clone())
        .unwrap_or_default();
    if actual != caption {
        return Err(eyre::eyre!("expected caption '{caption}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the content kind is "{kind}""#)]
fn content_kind_is(world: &ContentWorld, kind: String) -> Result<(), eyre::Report> {
    let actual = current(world)?.kind().to_string();
    if actual != kind {
        return Err(eyre::eyre!("expected kind {kind}, found {actual}"));
    }
    Ok(())
}

#[then("the replayed content matches the stored content")]
fn replayed_matches_stored(world: &ContentWorld) -> Result<(), eyre::Report> {
    if world.replayed.is_none() || world.replayed != world.stored {
        return Err(eyre::eyre!(
            "replayed {:?} does not match stored {:?}",
            world.replayed,
            world.stored
        ));
    }
    Ok(())
}

#[then("the content has a local file")]
fn content_has_local_file(world: &ContentWorld) -> Result<(), eyre::Report> {
    let file_id = current(world)?.file_id();
    let view = world
        .files
        .view(file_id)
        .ok_or_else(|| eyre::eyre!("file {file_id} is not registered"))?;
    if !view.has_local {
        return Err(eyre::eyre!("file {file_id} has no local copy"));
    }
    Ok(())
}

#[then("loading fails with a part failure")]
fn loading_fails_with_part_failure(world: &ContentWorld) -> Result<(), eyre::Report> {
    let result = world
        .secret_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing secret media result in scenario world"))?;
    if !matches!(result, Err(SecretMediaError::PartFailed { .. })) {
        return Err(eyre::eyre!("expected a part failure, got {result:?}"));
    }
    Ok(())
}
