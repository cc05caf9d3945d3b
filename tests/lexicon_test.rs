//! Integration tests for loading word lists and configuration from disk.

use std::fs;

use axum::Router;
use axum::routing::get;
use lancet::config::{LancetConfig, ProfanityConfig, StopwordConfig, StopwordSourceKind};
use lancet::error::{LancetError, Result};
use lancet::lexicon::{Lexicon, StopwordSource, load_stopwords};
use lancet::processor::TextProcessor;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Serve `body` at `/stopwords.txt` until the returned sender fires.
async fn spawn_word_list_server(
    body: &'static str,
) -> (String, oneshot::Sender<()>, JoinHandle<()>) {
    let app = Router::new().route("/stopwords.txt", get(move || async move { body }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
            .unwrap();
    });

    (format!("http://{address}/stopwords.txt"), stop_tx, handle)
}

#[tokio::test]
async fn test_file_stopwords_and_profanity() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let stopwords_path = temp_dir.path().join("stopwords.txt");
    let profanity_path = temp_dir.path().join("profanity.txt");
    fs::write(&stopwords_path, "# custom list\nfoo\nBar\n\n")?;
    fs::write(&profanity_path, "heck\n")?;

    let stopwords = StopwordConfig {
        source: StopwordSourceKind::File,
        path: Some(stopwords_path),
        ..StopwordConfig::default()
    };
    let profanity = ProfanityConfig {
        words_file: Some(profanity_path),
        ..ProfanityConfig::default()
    };

    let lexicon = Lexicon::load(&stopwords, &profanity).await?;
    assert_eq!(lexicon.stop_words().len(), 2);
    assert!(lexicon.stop_words().contains("bar"));
    assert!(lexicon.profanity().contains("heck"));
    assert!(!lexicon.profanity().contains("damn"));

    let result = TextProcessor::new(&lexicon)?.process("Foo the heck BAR the")?;
    assert_eq!(result.filtered_text, "the heck the");
    assert_eq!(result.abusive_words, vec!["heck"]);
    assert_eq!(result.repetitive_words, vec!["the"]);

    Ok(())
}

#[tokio::test]
async fn test_remote_source_reads_existing_cache() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("cache").join("stopwords.txt");
    fs::create_dir_all(cache_path.parent().unwrap())?;
    fs::write(&cache_path, "alpha\nbeta\n")?;

    // The URL is unreachable; a present cache means it is never requested.
    let source = StopwordSource::Remote {
        url: "http://127.0.0.1:9/stopwords.txt".to_string(),
        cache_path: cache_path.clone(),
    };

    let words = load_stopwords("english", &source).await?;
    assert_eq!(words.len(), 2);
    assert!(words.contains("alpha"));
    assert!(words.contains("beta"));

    Ok(())
}

#[tokio::test]
async fn test_remote_source_downloads_once_then_uses_cache() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("nested").join("dir").join("stopwords.txt");
    let (url, stop_tx, server) = spawn_word_list_server("# remote list\nAlpha\nbeta\n").await;

    let source = StopwordSource::Remote {
        url,
        cache_path: cache_path.clone(),
    };

    let words = load_stopwords("english", &source).await?;
    assert_eq!(words.len(), 2);
    assert!(words.contains("alpha"));
    assert_eq!(
        fs::read_to_string(&cache_path)?,
        "# remote list\nAlpha\nbeta\n"
    );
    let partial = cache_path.with_file_name("stopwords.txt.partial");
    assert!(!partial.exists());

    // With the server gone, the second load must come from the cache.
    stop_tx.send(()).unwrap();
    server.await.unwrap();

    let cached = load_stopwords("english", &source).await?;
    assert_eq!(cached, words);

    Ok(())
}

#[tokio::test]
async fn test_remote_source_rejects_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("stopwords.txt");
    let (url, stop_tx, _server) = spawn_word_list_server("# nothing here\n\n").await;

    let source = StopwordSource::Remote {
        url,
        cache_path: cache_path.clone(),
    };

    let result = load_stopwords("english", &source).await;
    assert!(matches!(result, Err(LancetError::Lexicon(_))));
    assert!(!cache_path.exists());

    let _ = stop_tx.send(());
}

#[tokio::test]
async fn test_remote_source_rejects_empty_cache() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("stopwords.txt");
    fs::write(&cache_path, "")?;

    let source = StopwordSource::Remote {
        url: "http://127.0.0.1:9/stopwords.txt".to_string(),
        cache_path,
    };

    let result = load_stopwords("english", &source).await;
    assert!(matches!(result, Err(LancetError::Lexicon(_))));

    Ok(())
}

#[tokio::test]
async fn test_remote_source_without_cache_fails_when_unreachable() {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("stopwords.txt");

    let source = StopwordSource::Remote {
        url: "http://127.0.0.1:9/stopwords.txt".to_string(),
        cache_path: cache_path.clone(),
    };

    let result = load_stopwords("english", &source).await;
    assert!(matches!(result, Err(LancetError::Http(_))));
    assert!(!cache_path.exists());
}

#[tokio::test]
async fn test_missing_profanity_file_is_fatal() {
    let profanity = ProfanityConfig {
        words_file: Some("/nonexistent/profanity.txt".into()),
        ..ProfanityConfig::default()
    };

    let result = Lexicon::load(&StopwordConfig::default(), &profanity).await;
    assert!(result.is_err());
}

#[test]
fn test_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("lancet.toml");
    fs::write(
        &config_path,
        r#"
[server]
port = 9090

[analysis]
repetition_threshold = 3

[profanity]
leetspeak = false
extra_words = ["frak"]
"#,
    )?;

    let config = LancetConfig::from_file(&config_path)?;
    assert_eq!(config.server.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.analysis.repetition_threshold, 3);
    assert!(!config.profanity.leetspeak);
    assert_eq!(config.profanity.extra_words, vec!["frak"]);
    assert_eq!(config.stopwords, StopwordConfig::default());

    Ok(())
}

#[test]
fn test_invalid_config_files() {
    let temp_dir = TempDir::new().unwrap();

    let missing = LancetConfig::from_file(temp_dir.path().join("missing.toml"));
    assert!(matches!(missing, Err(LancetError::Config(_))));

    let bad_path = temp_dir.path().join("bad.toml");
    fs::write(&bad_path, "[server]\nport = \"eighty\"\n").unwrap();
    assert!(matches!(
        LancetConfig::from_file(&bad_path),
        Err(LancetError::Toml(_))
    ));

    let incomplete_path = temp_dir.path().join("incomplete.toml");
    fs::write(&incomplete_path, "[stopwords]\nsource = \"remote\"\n").unwrap();
    assert!(matches!(
        LancetConfig::from_file(&incomplete_path),
        Err(LancetError::Config(_))
    ));
}
