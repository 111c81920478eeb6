//! Given steps for content lifecycle BDD scenarios.

use super::world::ContentWorld;
use eyre::WrapErr;
use missive::content::{
    decoder::{DecodeContext, decode_secret_media, key_fingerprint},
    domain::DialogId,
    secret_media::JoinBarrier,
    wire::{EncryptedFile, SecretKey, SecretMedia, SecretThumbnail},
};
use rstest_bdd_macros::given;

/// Server identifier of the encrypted photo in secret chat scenarios.
pub const SECRET_FILE_ID: i64 = 4_242;

#[given(r#"a stored photo with caption "{caption}""#)]
fn stored_photo(world: &mut ContentWorld, caption: String) {
    world.stored = Some(world.photo(&caption));
}

#[given("a secret photo in secret chat {chat_id:i32}")]
fn secret_photo(world: &mut ContentWorld, chat_id: i32) -> Result<(), eyre::Report> {
    let key = SecretKey {
        key: vec![3; 32],
        iv: vec![5; 32],
    };
    let file = EncryptedFile {
        id: SECRET_FILE_ID,
        access_hash: 9,
        size: 48_000,
        dc_id: 1,
        key_fingerprint: key_fingerprint(&key),
    };
    let media = SecretMedia::Photo {
        thumbnail: SecretThumbnail {
            bytes: vec![0xff, 0xd8],
            width: 40,
            height: 30,
        },
        width: 640,
        height: 480,
        size: 48_000,
        key,
        caption: String::new(),
    };

    let ctx = DecodeContext::new(&world.files, &world.options);
    let mut barrier = JoinBarrier::new();
    let pending = decode_secret_media(
        String::new(),
        Some(file),
        media,
        Vec::new(),
        DialogId::from_secret_chat(chat_id),
        &mut barrier,
        &ctx,
    )
    .wrap_err("decode secret photo")?;

    world.pending_secret = Some((pending, barrier));
    Ok(())
}

#[given("decryption of the photo fails")]
fn decryption_fails(world: &mut ContentWorld) -> Result<(), eyre::Report> {
    let payloads = world
        .payloads
        .take()
        .ok_or_else(|| eyre::eyre!("missing secret payload loader in scenario world"))?;
    world.payloads = Some(payloads.failing_file(SECRET_FILE_ID));
    Ok(())
}
