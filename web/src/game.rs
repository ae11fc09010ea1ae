use crate::notify;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use mnemo_core as game;
use std::time::Duration;
use web_time::Instant;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(game::TileId),
    Resolve(game::ResolutionTicket),
    UpdateTime,
    Replay,
    Exit,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: usize,
    tile: game::Tile,
    face: game::TileFace,
    callback: Callback<game::TileId>,
}

fn tile_classes(face: game::TileFace) -> Classes {
    use game::TileFace::*;
    classes!(
        "tile",
        match face {
            Concealed => classes!(),
            FaceUp => classes!("flipped"),
            Matched => classes!("flipped", "matched"),
        }
    )
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        tile,
        face,
        callback,
    } = props.clone();
    let id = tile.id();

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("{} click", id);
            callback.emit(id);
        })
    };

    let onkeydown = {
        let callback = callback.clone();
        Callback::from(move |e: KeyboardEvent| {
            if matches!(e.key().as_str(), "Enter" | " ") {
                e.prevent_default();
                log::trace!("{} key {:?}", id, e.key());
                callback.emit(id);
            }
        })
    };

    let label = format!("Tile {}", index + 1);
    let pressed = face.is_revealed().to_string();

    html! {
        <button class={tile_classes(face)} {onclick} {onkeydown} aria-pressed={pressed} aria-label={label}>
            <div class="tile-inner">
                <div class="front"/>
                <div class="back">{tile.value().to_string()}</div>
            </div>
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first deck instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::Session,
    prev_time: u64,
    _timer_interval: Interval,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(500, move || link.send_message(Msg::UpdateTime))
    }

    /// One-shot and never cancelled; tickets outliving a replay are ignored by the session.
    fn schedule_resolution(ctx: &Context<Self>, ticket: game::ResolutionTicket, delay: Duration) {
        let link = ctx.link().clone();
        let _timeout_id = Timeout::new(timeout_millis(delay), move || {
            link.send_message(Msg::Resolve(ticket))
        })
        .forget();
    }

    fn get_time(&self) -> u64 {
        self.session.elapsed(Instant::now()).as_secs()
    }

    fn select(&mut self, ctx: &Context<Self>, id: game::TileId) -> bool {
        use game::SelectOutcome::*;

        let outcome = self.session.select_tile(id, Instant::now());
        match outcome {
            Ignored(reason) => log::debug!("ignored {}: {:?}", id, reason),
            Flipped => {}
            Resolving(pending) => {
                log::debug!("turn {:?}: {:?}", pending.ticket, pending.verdict);
                Self::schedule_resolution(ctx, pending.ticket, pending.delay);
            }
        }
        outcome.has_update()
    }

    fn resolve(&mut self, ctx: &Context<Self>, ticket: game::ResolutionTicket) -> bool {
        use game::ResolveOutcome::*;

        match self.session.resolve(ticket, Instant::now()) {
            TooEarly(remaining) => {
                log::debug!("timer fired {:?} early, rescheduling", remaining);
                Self::schedule_resolution(ctx, ticket, remaining);
                false
            }
            outcome => outcome.has_update(),
        }
    }

    fn publish_notifications(&mut self) {
        for notification in self.session.drain_notifications() {
            notify::dispatch(&notification);
        }
    }

    fn end_panel(&self, ctx: &Context<Self>) -> Html {
        if !self.session.is_completed() {
            return html! {};
        }

        let cb_replay = ctx.link().callback(|_: MouseEvent| Msg::Replay);
        let cb_exit = ctx.link().callback(|_: MouseEvent| Msg::Exit);

        html! {
            <div class="end-state" role="status" aria-live="polite">
                <p>{"All pairs found, well done!"}</p>
                <p>{format!("Attempts: {}", self.session.attempts())}</p>
                <button class="replay" onclick={cb_replay}>{"Replay"}</button>
                <button class="cta" onclick={cb_exit}>{"Click here"}</button>
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: game::Session::new(game::GameConfig::default(), seed),
            prev_time: 0,
            _timer_interval: GameView::create_timer(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Select(id) => self.select(ctx, id),
            Resolve(ticket) => self.resolve(ctx, ticket),
            UpdateTime => {
                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            Replay => {
                self.session.replay(js_random_seed());
                self.prev_time = 0;
                true
            }
            Exit => {
                if !self.session.exit() {
                    log::debug!("exit ignored before completion");
                }
                false
            }
        };

        self.publish_notifications();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = &self.session;
        let attempts = format!("Attempts: {}", session.attempts());
        let pairs = format!(
            "Pairs found: {}/{}",
            session.pairs_found(),
            session.config().pairs
        );
        let elapsed_time = format_for_counter(self.get_time());
        let grid_class = classes!("grid", session.state().accepts_selection().then_some("playable"));

        html! {
            <div class="mnemo">
                <h1>{"Memory: Numbers"}</h1>
                <nav class="meta">
                    <div>{attempts}</div>
                    <div>{pairs}</div>
                    <aside>{elapsed_time}</aside>
                </nav>
                <div class={grid_class} role="grid" aria-label="Memory tiles">
                    {
                        for session.deck().iter().enumerate().map(|(index, &tile)| {
                            let face = session.face_of(tile.id());
                            let callback = ctx.link().callback(Msg::Select);
                            html! {
                                <TileView key={tile.id().to_string()} {index} {tile} {face} {callback}/>
                            }
                        })
                    }
                </div>
                {self.end_panel(ctx)}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_classes_follow_face() {
        assert_eq!(tile_classes(game::TileFace::Concealed), classes!("tile"));
        assert_eq!(
            tile_classes(game::TileFace::FaceUp),
            classes!("tile", "flipped")
        );
        assert_eq!(
            tile_classes(game::TileFace::Matched),
            classes!("tile", "flipped", "matched")
        );
    }

    #[test]
    fn url_args_set_seed() {
        #[derive(clap::Parser)]
        struct Cli {
            #[command(flatten)]
            game: GameProps,
        }

        let cli = <Cli as clap::Parser>::try_parse_from(["", "--seed=17"]).unwrap();
        assert_eq!(cli.game, GameProps { seed: Some(17) });

        let cli = <Cli as clap::Parser>::try_parse_from([""]).unwrap();
        assert_eq!(cli.game.seed, None);
    }
}
