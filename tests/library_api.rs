//! Library entry points driven through `PROMPTSYNC_HOME`.

mod common;

use common::TestContext;
use promptsync::{AskOutcome, ListScope, SyncOutcome};
use promptsync::{ConflictChoice, ConflictResolver, DestinationPreset};
use serial_test::serial;

struct AlwaysSkip;

impl ConflictResolver for AlwaysSkip {
    fn resolve(&mut self, _display_path: &str) -> Result<ConflictChoice, promptsync::AppError> {
        Ok(ConflictChoice::SkipAll)
    }
}

fn with_home<T>(ctx: &TestContext, body: impl FnOnce() -> T) -> T {
    unsafe { std::env::set_var("PROMPTSYNC_HOME", ctx.home()) };
    let result = body();
    unsafe { std::env::remove_var("PROMPTSYNC_HOME") };
    result
}

#[test]
#[serial]
fn library_lifecycle() {
    let ctx = TestContext::with_prompts(&[("general/review.md", "R"), ("rust/style.md", "S")]);
    let url = ctx.remote_url();

    with_home(&ctx, || {
        let outcome = promptsync::init(Some(&url)).expect("init failed");
        assert!(outcome.pull_warning.is_none());
        assert_eq!(promptsync::prompts_root().unwrap(), ctx.mirror_dir().join("prompts"));

        let all = promptsync::list(&ListScope::All).unwrap();
        assert_eq!(all.len(), 2);

        let shown = promptsync::show("#style").unwrap();
        assert_eq!(shown.content, "S");

        let synced = promptsync::sync("rust/style.md", &ctx.project_dir(), DestinationPreset::Vscode, |_| {
            panic!("target should not exist yet")
        })
        .unwrap();
        assert!(matches!(synced, SyncOutcome::Written { .. }));

        let kept = promptsync::sync("rust/style.md", &ctx.project_dir(), DestinationPreset::Vscode, |_| Ok(false))
            .unwrap();
        assert!(matches!(kept, SyncOutcome::Kept { .. }));

        let AskOutcome::Answer { primary, .. } = promptsync::ask("review").unwrap() else {
            panic!("expected an answer");
        };
        assert_eq!(primary.relative_path, "general/review.md");
    });
}

#[test]
#[serial]
fn library_apply_with_resolver() {
    let ctx = TestContext::with_prompts(&[("a.md", "A"), ("b.md", "B")]);
    ctx.write_config(
        "[[templates]]\nname = \"pair\"\nfiles = [{ source = \"a.md\" }, { source = \"b.md\" }]\n",
    );
    std::fs::create_dir_all(ctx.project_dir().join(".vscode/prompts")).unwrap();
    std::fs::write(ctx.project_dir().join(".vscode/prompts/a.md"), "mine").unwrap();

    with_home(&ctx, || {
        let template = promptsync::template("pair").unwrap();
        let destination = promptsync::Destination::preset(&ctx.project_dir(), DestinationPreset::Vscode);

        let outcome = promptsync::apply(&template, &destination, &mut AlwaysSkip).unwrap();

        assert_eq!(
            outcome,
            promptsync::ApplyOutcome::Completed(promptsync::CopySummary {
                copied: 1,
                skipped: 1,
                failed: 0
            })
        );
    });
    assert_eq!(ctx.read_project_file(".vscode/prompts/a.md"), "mine");
}
