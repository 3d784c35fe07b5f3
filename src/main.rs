//! Herald - Discord 语音频道进出播报机器人
//!
//! 启动顺序：配置 -> 日志 -> 适配器 -> 应用层 -> IdleWorker -> 存活探针 -> Discord 网关

use std::sync::Arc;

use anyhow::Context;
use herald::application::{
    AnnounceHandler, AudioStoragePort, PlaybackController, VoiceUpdateHandler,
};
use herald::config::{load_config, print_config};
use herald::infrastructure::adapters::{
    FileAudioStorage, GoogleTtsClient, HttpAudioFetcher, HttpAudioFetcherConfig,
    SongbirdVoiceGateway,
};
use herald::infrastructure::{build_client, HttpServer, IdleWorker, ServerConfig, VoiceEventHandler};
use songbird::Songbird;
use tokio::sync::{mpsc, watch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 中的变量（BOT_TOKEN、PORT 等）
    let _ = dotenvy::dotenv();

    // 加载配置（优先级：环境变量 > 配置文件 > 旧版变量 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},herald={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Herald - voice channel announcer");
    print_config(&config);

    // 暂存目录
    let audio_storage = Arc::new(FileAudioStorage::new(&config.storage.staging_dir));
    audio_storage.prepare().await?;

    // TTS + 下载
    let tts_engine = Arc::new(GoogleTtsClient::new());
    let fetcher_config = HttpAudioFetcherConfig::default().with_timeout(config.tts.timeout_secs);
    let audio_fetcher = Arc::new(HttpAudioFetcher::new(fetcher_config)?);

    // 语音
    let songbird = Songbird::serenity();
    let voice_gateway = Arc::new(SongbirdVoiceGateway::new(songbird.clone()));

    // 空闲信号队列
    let (idle_tx, idle_rx) = mpsc::channel(16);

    let playback = Arc::new(PlaybackController::new(
        voice_gateway,
        audio_storage.clone(),
        idle_tx,
    ));
    let announcer = Arc::new(AnnounceHandler::new(
        tts_engine,
        audio_fetcher,
        audio_storage,
        playback.clone(),
        config.tts.speech_options(),
    ));
    let watcher = Arc::new(VoiceUpdateHandler::new(announcer));

    // 关闭信号（IdleWorker 与存活探针共用）
    let (stop_tx, stop_rx) = watch::channel(false);
    let shutdown = |mut rx: watch::Receiver<bool>| async move {
        let _ = rx.changed().await;
    };

    // 启动 IdleWorker
    let worker = IdleWorker::new(idle_rx, playback);
    let worker_handle = tokio::spawn(worker.run(shutdown(stop_rx.clone())));

    // 存活探针：端口绑定失败直接退出
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::bind(&server_config)
        .await
        .with_context(|| format!("Failed to bind keep-alive server on {}", server_config.addr()))?;
    let server_handle = tokio::spawn(server.run_with_shutdown(shutdown(stop_rx)));

    // Discord 网关
    let mut client = build_client(
        &config.discord.token,
        VoiceEventHandler::new(watcher),
        songbird,
    )
    .await
    .context("Failed to create Discord client")?;
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Connecting to Discord gateway...");

    tokio::select! {
        result = client.start() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Discord client stopped");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal");
            shard_manager.shutdown_all().await;
        }
    }

    let _ = stop_tx.send(true);
    if let Err(e) = server_handle.await? {
        tracing::error!(error = %e, "Keep-alive server error");
    }
    worker_handle.await?;

    tracing::info!("Shutdown complete");

    Ok(())
}
