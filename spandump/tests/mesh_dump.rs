use spandump::{dump_array, dump_span, print_array, print_span, DumpOptions, Dumper, Span};

struct Mesh {
    name: String,
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    triangles: Vec<[u32; 3]>,
    sets: Vec<String>,
}

fn cube_face() -> Mesh {
    Mesh {
        name: "pCube1".to_string(),
        positions: vec![
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
        ],
        uvs: vec![[0.375, 0.0], [0.625, 0.0], [0.375, 0.25], [0.625, 0.25]],
        triangles: vec![[0, 1, 2], [2, 1, 3]],
        sets: vec!["initialShadingGroup".to_string()],
    }
}

#[test]
fn test_dump_mesh_lines() {
    let mesh = cube_face();
    let mut out = vec![];
    dump_span::<f32, _, _>(&mut out, "position", Span::from(&mesh.positions), "\t").unwrap();
    out.push(b'\n');
    dump_span::<u32, _, _>(&mut out, "indices", Span::from(&mesh.triangles), "\t").unwrap();
    out.push(b'\n');
    // flattened indices are printed without grouping
    let flat: &[u32] = bytemuck::cast_slice(&mesh.triangles[..]);
    dump_span::<u32, _, _>(&mut out, "flat", Span::from(flat), "\t").unwrap();
    out.push(b'\n');
    dump_array(&mut out, "sets", &mesh.sets, "\t").unwrap();
    let expected = concat!(
        "\t\"position\": [-0.5,-0.5,0.5,  0.5,-0.5,0.5,  -0.5,0.5,0.5,  0.5,0.5,0.5]\n",
        "\t\"indices\": [0,1,2,  2,1,3]\n",
        "\t\"flat\": [0, 1, 2, 2, 1, 3]\n",
        "\t\"sets\": [\"initialShadingGroup\"]",
    );
    assert_eq!(expected, String::from_utf8(out).unwrap());
}

#[test]
fn test_dump_mesh_structured() {
    let mesh = cube_face();
    let mut d = Dumper::with_options(vec![], DumpOptions::default().with_indent_unit("  "));
    d.begin_object(None).unwrap();
    d.begin_object(Some(mesh.name.as_str())).unwrap();
    d.span::<f32, _>("uv", Span::from(&mesh.uvs)).unwrap();
    d.span::<u32, _>("indices", Span::from(&mesh.triangles)).unwrap();
    d.array("sets", &mesh.sets).unwrap();
    d.end_object().unwrap();
    d.end_object().unwrap();
    let text = String::from_utf8(d.finish().unwrap()).unwrap();
    let expected = concat!(
        "{\n",
        "  \"pCube1\": {\n",
        "    \"uv\": [0.375,0,  0.625,0,  0.375,0.25,  0.625,0.25],\n",
        "    \"indices\": [0,1,2,  2,1,3],\n",
        "    \"sets\": [\"initialShadingGroup\"]\n",
        "  }\n",
        "}\n",
    );
    assert_eq!(expected, text);
}

// stdout is not captured here, the text itself is covered by the dump_* tests.
#[test]
fn test_print_to_stdout_smoke() {
    let mesh = cube_face();
    print_span::<f32, _>("position", Span::from(&mesh.positions), "").unwrap();
    println!();
    print_array("sets", &mesh.sets, "").unwrap();
    println!();
}
