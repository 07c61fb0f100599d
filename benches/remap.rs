use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_xlsxwriter::Workbook;
use sheet_remap::address::split_address;
use sheet_remap::{remap_workbook, RemapOptions};

fn orders_fixture(rows: u32) -> Vec<u8> {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let header: [&[&str]; 3] = [
        &["Order No", "Name", "Address", "PinCode"],
        &["order no", "name", "", "COD"],
        &[
            "Reference",
            "Consignee Name",
            "Receiver Add Line 1",
            "Receiver City",
            "Receiver Pincode",
            "Payment Mode",
        ],
    ];
    for (r, row) in header.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                ws.write_string(r as u32, c as u16, *cell).unwrap();
            }
        }
    }
    for i in 0..rows {
        let r = i + 3;
        ws.write_string(r, 0, format!("A-{i}")).unwrap();
        ws.write_string(r, 1, format!("Customer {i}")).unwrap();
        ws.write_string(
            r,
            2,
            format!("{i} MG Road, Opp Park, Indiranagar, Bangalore, Karnataka, 560038"),
        )
        .unwrap();
        ws.write_string(r, 3, "560038").unwrap();
    }
    wb.save_to_buffer().unwrap()
}

fn bench_split_address(c: &mut Criterion) {
    let addr = "Flat 4B, Tower 2, Green Acres, Whitefield, Bangalore, Karnataka, 560066";
    c.bench_function("split_address/7_segments", |b| {
        b.iter(|| split_address(black_box(addr)))
    });
}

fn bench_remap_workbook(c: &mut Criterion) {
    let input = orders_fixture(1_000);
    let opts = RemapOptions::default();
    c.bench_function("remap_workbook/1k_rows", |b| {
        b.iter(|| remap_workbook(black_box(&input), &opts).unwrap())
    });
}

criterion_group!(benches, bench_split_address, bench_remap_workbook);
criterion_main!(benches);
