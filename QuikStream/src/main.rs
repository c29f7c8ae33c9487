mod logging;

use std::sync::Arc;

use qsconfig::get_config;
use qsplayer::{ClockPlayer, PlayerSettings, format_time};
use qsstreams::{GetStreamsUseCase, StreamRepositoryImpl, StreamsConfigExt};
use qsui::{MainScreenState, MainUiState, MainViewModel, PlaybackViewModel, Route};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();
    logging::init_logging(&config);

    // ========== Stream list ==========

    let client = config.streams_client_builder()?.build()?;
    info!(endpoint = %client.endpoint(), "Stream catalogue endpoint");

    let repository = StreamRepositoryImpl::new(Arc::new(client));
    let main_vm = MainViewModel::new(GetStreamsUseCase::new(Arc::new(repository)));
    let mut screen = MainScreenState::new();
    let mut states = main_vm.subscribe();

    main_vm.fetch_streams();
    loop {
        states.changed().await?;
        let state = states.borrow_and_update().clone();
        screen.apply(state);
        match screen.ui_state() {
            MainUiState::Idle | MainUiState::Loading => info!("Loading streams..."),
            MainUiState::Success { streams } => {
                info!("{} stream(s) available", streams.len());
                for stream in streams {
                    info!("  - {} by {} ({})", stream.name, stream.author, stream.url);
                }
                break;
            }
            MainUiState::Error { message } => {
                error!("{}", message);
                return Err(message.clone().into());
            }
        }
    }

    let Some(route) = screen.play_route() else {
        warn!("No stream to play");
        return Ok(());
    };

    // ========== Playback ==========

    let route = route.to_string();
    info!(route = %route, "Opening playback screen");
    let args = Route::parse(&route).map(|r| r.args()).unwrap_or_default();

    let settings = PlayerSettings::from_config(&config)?;
    let mut playback = PlaybackViewModel::new(&args, ClockPlayer::new(), settings)?;
    playback.on_visible();
    info!(name = %playback.stream().name, "Playing. Press Ctrl+C to stop...");

    if let Some(mut progress) = playback.subscribe() {
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                changed = progress.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let p = *progress.borrow_and_update();
                    info!(
                        "{} / {}{}",
                        format_time(p.position_ms),
                        format_time(p.duration_ms),
                        if p.is_playing { "" } else { " (paused)" }
                    );
                }
            }
        }
    }

    playback.on_hidden();
    drop(playback);
    info!("QuikStream stopped");
    Ok(())
}
