//! End-to-end route table of an injected controller

use rstest::*;
use trellis::Application;
use trellis::di::{DiError, DiResult, Injectable, Injected, Instance};
use trellis::urls::{Controller, Handler, Method};

#[derive(Default)]
struct ArticleRepository;
impl Injectable for ArticleRepository {}

impl ArticleRepository {
	fn title(&self) -> &'static str {
		"hello"
	}
}

#[derive(Default)]
struct ArticleController {
	repository: Injected<ArticleRepository>,
}

impl ArticleController {
	fn get_detail(&self) -> String {
		match self.repository.get() {
			Some(repository) => format!("get detail {}", repository.title()),
			None => "get detail".to_string(),
		}
	}

	fn add_article(&self) -> String {
		"post add".to_string()
	}

	fn draft(&self) -> String {
		"draft".to_string()
	}
}

impl Injectable for ArticleController {
	fn inject(&self, property: &str, dependency: Instance) -> DiResult<()> {
		match property {
			"repository" => self.repository.set(dependency),
			_ => Err(DiError::unknown_property(self, property)),
		}
	}
}

impl Controller for ArticleController {
	type Output = String;
}

fn bootstrap(app: &Application) {
	app.bootstrap(|ctx| {
		ctx.registrar()
			.provide::<ArticleRepository>(None)
			.provide::<ArticleController>(None)
			.inject::<ArticleController>("repository", "ArticleRepository");
		ctx.controller::<ArticleController>()
			.root("/article")
			.get("get_detail", "/detail", ArticleController::get_detail)
			.post("add_article", "/add", ArticleController::add_article)
			.handler(
				"draft",
				Handler::<ArticleController>::new(ArticleController::draft),
			);
	})
	.unwrap();
}

#[fixture]
fn app() -> Application {
	let app = Application::default();
	bootstrap(&app);
	app
}

#[rstest]
fn routes_follow_declaration_order(app: Application) {
	// Act
	let routes = app.routes::<ArticleController>("ArticleController").unwrap();

	// Assert
	let summary: Vec<(Method, String)> = routes
		.iter()
		.map(|route| (route.method.clone(), route.full_path.clone()))
		.collect();
	assert_eq!(
		summary,
		vec![
			(Method::GET, "/article/detail".to_string()),
			(Method::POST, "/article/add".to_string()),
		]
	);
}

#[rstest]
fn unannotated_handler_is_not_emitted(app: Application) {
	// Act
	let routes = app.routes::<ArticleController>("ArticleController").unwrap();

	// Assert
	assert_eq!(routes.len(), 2);
	assert!(routes.iter().all(|route| route.member != "draft"));
}

#[rstest]
fn handlers_run_against_the_injected_controller(app: Application) {
	// Arrange
	let controller = app
		.resolve_as::<ArticleController>("ArticleController")
		.unwrap();
	let routes = app.routes::<ArticleController>("ArticleController").unwrap();

	// Act
	let detail = routes
		.find(&Method::GET, "/article/detail")
		.map(|route| route.invoke(&controller));
	let add = routes
		.find(&Method::POST, "/article/add")
		.map(|route| route.invoke(&controller));

	// Assert
	assert_eq!(detail.as_deref(), Some("get detail hello"));
	assert_eq!(add.as_deref(), Some("post add"));
}

#[rstest]
fn route_table_renders_as_lines(app: Application) {
	// Act
	let rendered = app
		.routes::<ArticleController>("ArticleController")
		.unwrap()
		.to_string();

	// Assert
	assert_eq!(rendered, "GET /article/detail\nPOST /article/add");
}
