use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use boggle_core::model::board::Cell;
use boggle_core::model::lexicon::Lexicon;
use boggle_core::model::round::{Move, Round};

mod config;

use config::ServerConfig;

/// Query parameters for `/v1/new_board`
#[derive(Deserialize)]
struct NewBoardParams {
	size: Option<usize>,
}

/// Query parameters for `/v1/move`
#[derive(Deserialize)]
struct MoveParams {
	row: usize,
	col: usize,
}

/// Current board plus the active path.
#[derive(Serialize, Deserialize)]
struct BoardView {
	size: usize,
	rows: Vec<String>,
	path: Vec<Cell>,
}

#[derive(Serialize, Deserialize)]
struct MoveView {
	outcome: Move,
	path: Vec<Cell>,
}

#[derive(Serialize, Deserialize)]
struct LetterWeight {
	letter: char,
	weight: f64,
}

struct SharedData {
	round: Round,
	max_board_size: usize,
	default_board_size: usize,
}

impl BoardView {
	fn of(round: &Round) -> Self {
		let board = round.current_board();
		Self { size: board.size(), rows: board.rows(), path: round.path().to_vec() }
	}
}

/// HTTP PUT endpoint `/v1/new_board`
///
/// Replaces the board and clears the path. Without `size`, the configured
/// board size is used.
#[put("/v1/new_board")]
async fn put_new_board(data: web::Data<Mutex<SharedData>>, query: web::Query<NewBoardParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};

	let size = query.size.unwrap_or(shared_data.default_board_size);
	if size > shared_data.max_board_size {
		return HttpResponse::BadRequest()
			.body(format!("Board size must be at most {}", shared_data.max_board_size));
	}

	match shared_data.round.new_board(size).map(|_| ()) {
		Ok(()) => HttpResponse::Ok().json(BoardView::of(&shared_data.round)),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

#[get("/v1/board")]
async fn get_board(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};
	HttpResponse::Ok().json(BoardView::of(&shared_data.round))
}

/// HTTP PUT endpoint `/v1/move`
///
/// Appends one cell to the path. The outcome drives the render layer:
/// `partial` / `word` are shown green, `invalid` red.
#[put("/v1/move")]
async fn put_move(data: web::Data<Mutex<SharedData>>, query: web::Query<MoveParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};

	let cell = Cell::new(query.row, query.col);
	if !shared_data.round.current_board().contains(cell) {
		return HttpResponse::BadRequest().body(format!("Cell ({}, {}) is outside the board", cell.row, cell.col));
	}

	let outcome = shared_data.round.append_move(cell);
	HttpResponse::Ok().json(MoveView { outcome, path: shared_data.round.path().to_vec() })
}

#[put("/v1/reset")]
async fn put_reset(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};
	shared_data.round.reset_path();
	HttpResponse::Ok().json(BoardView::of(&shared_data.round))
}

/// HTTP GET endpoint `/v1/solve`
///
/// Returns every distinct word on the current board, sorted.
#[get("/v1/solve")]
async fn get_solve(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};
	let words: Vec<String> = shared_data.round.solve_all().into_iter().collect();
	HttpResponse::Ok().json(words)
}

#[get("/v1/frequency")]
async fn get_frequency(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Round lock failed"),
	};
	let weights: Vec<LetterWeight> = shared_data
		.round
		.lexicon()
		.frequency()
		.iter()
		.map(|(letter, weight)| LetterWeight { letter, weight })
		.collect();
	HttpResponse::Ok().json(weights)
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(put_new_board)
		.service(get_board)
		.service(put_move)
		.service(put_reset)
		.service(get_solve)
		.service(get_frequency);
}

/// Main entry point for the server.
///
/// Loads the configuration and the lexicon, starts one round, wraps it in a
/// `Mutex` and serves it over HTTP.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config: ServerConfig = config::read("config.yaml").map_err(|e| std::io::Error::other(e.to_string()))?;
	let lexicon = Lexicon::new(&config.word_file).map_err(std::io::Error::other)?;
	log::info!("Loaded {} words from {}", lexicon.word_count(), config.word_file);

	let round = Round::new(Arc::new(lexicon), config.board_size).map_err(std::io::Error::other)?;
	let shared_data = SharedData {
		round,
		max_board_size: config.max_board_size,
		default_board_size: config.board_size,
	};
	let shared_round = web::Data::new(Mutex::new(shared_data));

	log::info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_round.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::test;
	use boggle_core::model::board::Board;

	fn shared(rows: &[&str], words: &[&str]) -> web::Data<Mutex<SharedData>> {
		let lexicon = Arc::new(Lexicon::from_words(words).unwrap());
		let round = Round::with_board(lexicon, Board::from_rows(rows).unwrap());
		web::Data::new(Mutex::new(SharedData { round, max_board_size: 6, default_board_size: 3 }))
	}

	#[actix_web::test]
	async fn moves_report_outcome_and_path() {
		let app = test::init_service(
			App::new().app_data(shared(&["cat", "xxx", "xxx"], &["cat"])).configure(routes),
		)
		.await;

		let req = test::TestRequest::put().uri("/v1/move?row=0&col=0").to_request();
		let reply: MoveView = test::call_and_read_body_json(&app, req).await;
		assert_eq!(reply.outcome, Move::Partial);
		assert_eq!(reply.path, vec![Cell::new(0, 0)]);

		let req = test::TestRequest::put().uri("/v1/move?row=1&col=1").to_request();
		let reply: MoveView = test::call_and_read_body_json(&app, req).await;
		assert_eq!(reply.outcome, Move::Invalid);
		assert_eq!(reply.path, vec![Cell::new(0, 0)]);

		let req = test::TestRequest::put().uri("/v1/move?row=0&col=1").to_request();
		let _: MoveView = test::call_and_read_body_json(&app, req).await;
		let req = test::TestRequest::put().uri("/v1/move?row=0&col=2").to_request();
		let reply: MoveView = test::call_and_read_body_json(&app, req).await;
		assert_eq!(reply.outcome, Move::Word("cat".to_owned()));
		assert!(reply.path.is_empty());
	}

	#[actix_web::test]
	async fn move_outside_the_board_is_a_bad_request() {
		let app = test::init_service(
			App::new().app_data(shared(&["cat", "xxx", "xxx"], &["cat"])).configure(routes),
		)
		.await;
		let req = test::TestRequest::put().uri("/v1/move?row=3&col=0").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn new_board_respects_size_limits() {
		let app = test::init_service(
			App::new().app_data(shared(&["cat", "xxx", "xxx"], &["cat"])).configure(routes),
		)
		.await;

		let req = test::TestRequest::put().uri("/v1/new_board?size=4").to_request();
		let view: BoardView = test::call_and_read_body_json(&app, req).await;
		assert_eq!(view.size, 4);
		assert_eq!(view.rows.len(), 4);
		assert!(view.path.is_empty());

		let req = test::TestRequest::put().uri("/v1/new_board").to_request();
		let view: BoardView = test::call_and_read_body_json(&app, req).await;
		assert_eq!(view.size, 3);

		let req = test::TestRequest::put().uri("/v1/new_board?size=7").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

		let req = test::TestRequest::put().uri("/v1/new_board?size=0").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn solve_and_reset() {
		let app = test::init_service(
			App::new().app_data(shared(&["aat", "xxx", "xxx"], &["at", "aa"])).configure(routes),
		)
		.await;

		let req = test::TestRequest::get().uri("/v1/solve").to_request();
		let words: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(words, vec!["aa", "at"]);

		let req = test::TestRequest::put().uri("/v1/move?row=0&col=1").to_request();
		let _: MoveView = test::call_and_read_body_json(&app, req).await;
		let req = test::TestRequest::put().uri("/v1/reset").to_request();
		let view: BoardView = test::call_and_read_body_json(&app, req).await;
		assert!(view.path.is_empty());
		assert_eq!(view.rows, vec!["aat", "xxx", "xxx"]);
	}

	#[actix_web::test]
	async fn frequency_lists_every_letter() {
		let app = test::init_service(
			App::new().app_data(shared(&["cat", "xxx", "xxx"], &["cat", "car"])).configure(routes),
		)
		.await;
		let req = test::TestRequest::get().uri("/v1/frequency").to_request();
		let weights: Vec<LetterWeight> = test::call_and_read_body_json(&app, req).await;
		let letters: Vec<char> = weights.iter().map(|w| w.letter).collect();
		assert_eq!(letters, vec!['a', 'c', 'r', 't']);
		assert!(weights.iter().all(|w| w.weight > 0.0));
	}
}
