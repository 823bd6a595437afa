mod cleanup;
mod failure_classification;
mod idempotence;
