use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sprintboard::config::BoardConfig;
use sprintboard::model::{Task, TaskCategory, TaskStatus, User};
use sprintboard::store::SprintStore;

fn big_board(members: usize, tasks_per_member: usize) -> SprintStore {
    let users = (0..members)
        .map(|n| {
            User::new(
                format!("user-{n}").as_str().into(),
                format!("Member {n}"),
                "🙂".to_string(),
                (n as i64 % 7) * 100,
                0,
            )
        })
        .collect::<Vec<_>>();

    let tasks = (0..members * tasks_per_member)
        .map(|n| {
            Task::new(
                format!("task-{n}").as_str().into(),
                format!("Task {n}"),
                String::new(),
                100,
                TaskCategory::Feature,
                TaskStatus::Todo,
                format!("user-{}", n % members).as_str().into(),
            )
        })
        .collect();

    SprintStore::new(users, tasks, vec![], BoardConfig::default())
}

fn derived_metrics(c: &mut Criterion) {
    let store = big_board(200, 50);

    c.bench_function("team_average_points", |b| {
        b.iter(|| black_box(store.team_average_points()))
    });

    c.bench_function("is_user_below_average", |b| {
        b.iter(|| black_box(store.is_user_below_average(&"user-150".into())))
    });
}

fn move_task(c: &mut Criterion) {
    c.bench_function("move_task_to_done", |b| {
        b.iter_batched(
            || big_board(200, 50),
            |mut store| {
                store
                    .move_task(&"task-9999".into(), TaskStatus::Done)
                    .unwrap()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, derived_metrics, move_task);
criterion_main!(benches);
