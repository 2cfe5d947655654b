//! Frame codec benchmarks.
//!
//! Measures the hot paths of the frame layer:
//! - 9-byte header encode/decode
//! - Per-type frame encode and parse throughput
//! - DATA encoding across body sizes (contiguous vs vectored)
//! - HPACK field building (indexed, literal, Huffman)
//!
//! Run with: cargo bench --bench codec_performance

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use h2wire::codec::{FrameCodec, FrameHeader, FrameReader};
use h2wire::frames::{
    DataFrame, Frame, FrameFlags, FrameType, HeadersFrame, PingFrame, PrioritySpec, SettingsFrame,
};
use h2wire::hpack::HeaderField;
use h2wire::settings::{Settings, SettingsBuilder};

fn bench_header_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_header");

    group.bench_function("encode", |b| {
        b.iter(|| {
            let header = FrameCodec::encode_header(
                black_box(FrameType::Headers),
                black_box(FrameFlags::from_u8(0x05)),
                black_box(1),
                black_box(4096),
            );
            black_box(header);
        });
    });

    group.bench_function("decode", |b| {
        let bytes = FrameCodec::encode_header(FrameType::Headers, FrameFlags::from_u8(0x05), 1, 4096);
        b.iter(|| {
            let header = FrameHeader::parse(black_box(&bytes));
            black_box(header);
        });
    });

    group.finish();
}

fn bench_frame_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_encode");

    let headers = Frame::Headers(
        HeadersFrame::new(1, Bytes::from(vec![0x82u8; 256]), false, true)
            .with_priority(PrioritySpec::new(3, false, 16)),
    );
    group.bench_function("headers_with_priority", |b| {
        b.iter(|| black_box(headers.encode()));
    });

    let settings = Frame::Settings(SettingsFrame::new(
        SettingsBuilder::new()
            .header_table_size(8192)
            .enable_push(false)
            .max_concurrent_streams(100)
            .initial_window_size(1 << 20)
            .max_frame_size(65_536)
            .build()
            .unwrap(),
    ));
    group.bench_function("settings_full", |b| {
        b.iter(|| black_box(settings.encode()));
    });

    let ping = Frame::Ping(PingFrame::new([7; 8]));
    group.bench_function("ping", |b| {
        b.iter(|| black_box(ping.encode()));
    });

    group.finish();
}

fn bench_data_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_encode");

    for size in [1024usize, 16_384, 262_144] {
        let frame = DataFrame::new(1, Bytes::from(vec![0xAB; size]), true);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("contiguous", size), &frame, |b, frame| {
            b.iter(|| black_box(FrameCodec::encode_data_frame(frame)));
        });
        group.bench_with_input(BenchmarkId::new("vectored", size), &frame, |b, frame| {
            b.iter(|| black_box(FrameCodec::encode_data_frame_vectored(frame)));
        });
    }

    group.finish();
}

fn bench_frame_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_parse");
    let settings = Settings::default_settings();

    let data_wire = Frame::Data(DataFrame::new(1, Bytes::from(vec![0xCD; 16_384]), false))
        .encode();
    group.throughput(Throughput::Bytes(data_wire.len() as u64));
    group.bench_function("data_16k", |b| {
        b.iter(|| {
            let mut reader = FrameReader::new(data_wire.clone());
            black_box(FrameCodec::decode(&mut reader, &settings).unwrap());
        });
    });

    let headers_wire = Frame::Headers(
        HeadersFrame::new(1, Bytes::from(vec![0x82u8; 512]), true, true)
            .with_priority(PrioritySpec::new(3, true, 200))
            .with_padding(32),
    )
    .encode();
    group.bench_function("headers_maximal", |b| {
        b.iter(|| {
            let mut reader = FrameReader::new(headers_wire.clone());
            black_box(FrameCodec::decode(&mut reader, &settings).unwrap());
        });
    });

    group.finish();
}

fn bench_hpack_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("hpack_field");

    group.bench_function("indexed", |b| {
        b.iter(|| black_box(HeaderField::Indexed(black_box(2)).encode()));
    });

    group.bench_function("for_pair_static_hit", |b| {
        b.iter(|| black_box(HeaderField::for_pair(black_box(":method"), black_box("GET"))));
    });

    let field = HeaderField::for_pair("user-agent", "Mozilla/5.0 (compatible; bench/1.0)");
    group.bench_function("literal_huffman_value", |b| {
        b.iter(|| black_box(field.encode()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_header_codec,
    bench_frame_encode,
    bench_data_encode_sizes,
    bench_frame_parse,
    bench_hpack_fields
);
criterion_main!(benches);
