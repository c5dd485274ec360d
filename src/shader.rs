//! GLSL ES 3.00 sources for the background quad.
//!
//! The fragment program is the GPU form of [`crate::pattern::evaluate`]; keep
//! the constants of the two in step.

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec2 aPosition;
out vec2 vUv;

void main() {
    vUv = aPosition * 0.5 + 0.5;
    gl_Position = vec4(aPosition, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform float uTime;
uniform vec2 uResolution;
uniform vec2 uMouse;

in vec2 vUv;
out vec4 outColor;

float random(vec2 st) {
    return fract(sin(dot(st, vec2(12.9898, 78.233))) * 43758.5453);
}

float noise(vec2 st) {
    vec2 i = floor(st);
    vec2 f = fract(st);
    float a = random(i);
    float b = random(i + vec2(1.0, 0.0));
    float c = random(i + vec2(0.0, 1.0));
    float d = random(i + vec2(1.0, 1.0));
    vec2 u = f * f * (3.0 - 2.0 * f);
    return mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y;
}

float fbm(vec2 st) {
    float v = 0.0;
    float a = 0.5;
    for (int i = 0; i < 4; i++) {
        v += a * noise(st);
        st *= 2.0;
        a *= 0.5;
    }
    return v;
}

void main() {
    vec2 uv = vUv;
    float aspect = uResolution.x / uResolution.y;
    vec2 centered = (uv - 0.5) * vec2(aspect, 1.0);

    float n = fbm(centered * 2.0 + uTime * 0.1);

    float gradient = 1.0 - length(centered) * 0.7;
    float pattern = gradient * 0.25 + n * 0.12;
    vec3 color = mix(vec3(0.039), vec3(0.065), clamp(pattern, 0.0, 1.0));

    float glow = smoothstep(0.6, 0.0, length(centered - vec2(0.2, 0.1))) * 0.02;
    color = mix(color, vec3(1.0, 0.4, 0.0), glow);

    float grain = random(gl_FragCoord.xy + uTime * 100.0) * 0.025;
    color += grain - 0.0125;

    color *= 1.0 - length(uv - 0.5) * 0.4;

    outColor = vec4(color, 1.0);
}
"#;

/// Two triangles covering clip space.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const UNIFORM_TIME: &str = "uTime";
pub const UNIFORM_RESOLUTION: &str = "uResolution";
pub const UNIFORM_POINTER: &str = "uMouse";
pub const ATTRIBUTE_POSITION: &str = "aPosition";
