use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docveil_engine::{
    annotate_for_flagging, annotate_for_redaction, FlaggingOptions, RedactionOptions,
};

fn synthetic_document(paragraphs: usize) -> String {
    let paragraph = "Dr. Jane Roe (MRN: AB-339201) was seen on March 5, 2024 at \
                     17 Elm Street. Contact jane@roe.org or (555) 867-5309. \
                     Card 4532 0151 1283 0366, account no. 1122334455, routing 021000021. \
                     This record is privileged and confidential; the patient was \
                     diagnosed under HIPAA-covered care. ";
    paragraph.repeat(paragraphs)
}

fn bench_redaction(c: &mut Criterion) {
    let small = synthetic_document(1);
    let large = synthetic_document(100);
    let options = RedactionOptions::default();

    c.bench_function("redact_small_doc", |b| {
        b.iter(|| annotate_for_redaction(black_box(&small), &options).unwrap())
    });
    c.bench_function("redact_large_doc", |b| {
        b.iter(|| annotate_for_redaction(black_box(&large), &options).unwrap())
    });
}

fn bench_flagging(c: &mut Criterion) {
    let large = synthetic_document(100);
    let options = FlaggingOptions::default();

    c.bench_function("flag_large_doc", |b| {
        b.iter(|| annotate_for_flagging(black_box(&large), &options))
    });
}

criterion_group!(benches, bench_redaction, bench_flagging);
criterion_main!(benches);
