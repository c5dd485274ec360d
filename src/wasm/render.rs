use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use super::{dom, SharedSite};
use crate::background::{FrameUniforms, Surface};
use crate::error::SiteError;
use crate::render_state::OutputSize;
use crate::shader;

/// WebGL2 full-screen quad running the pattern fragment program.
pub struct GlSurface {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    u_time: WebGlUniformLocation,
    u_resolution: WebGlUniformLocation,
    // The program ignores the pointer today, so the driver may strip it.
    u_pointer: Option<WebGlUniformLocation>,
}

impl GlSurface {
    pub fn from_document(document: &Document, canvas_id: &str) -> Result<Self, SiteError> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SiteError::MissingElement(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SiteError::MissingElement(canvas_id.to_string()))?;
        Self::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SiteError> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or(SiteError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| SiteError::ContextUnavailable)?;

        let vert = compile_shader(&gl, GL::VERTEX_SHADER, shader::VERTEX_SHADER)?;
        let frag = compile_shader(&gl, GL::FRAGMENT_SHADER, shader::FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vert, &frag)?;

        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| SiteError::Js("create_vertex_array".into()))?;
        gl.bind_vertex_array(Some(&vao));

        let buffer = gl
            .create_buffer()
            .ok_or_else(|| SiteError::Js("create_buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&shader::QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        let position = gl.get_attrib_location(&program, shader::ATTRIBUTE_POSITION);
        if position < 0 {
            return Err(SiteError::MissingUniform(shader::ATTRIBUTE_POSITION.into()));
        }
        gl.enable_vertex_attrib_array(position as u32);
        gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);

        let uniform = |name: &str| {
            gl.get_uniform_location(&program, name)
                .ok_or_else(|| SiteError::MissingUniform(name.to_string()))
        };
        let u_time = uniform(shader::UNIFORM_TIME)?;
        let u_resolution = uniform(shader::UNIFORM_RESOLUTION)?;
        let u_pointer = uniform(shader::UNIFORM_POINTER).ok();

        Ok(Self {
            canvas,
            gl,
            program,
            vao,
            u_time,
            u_resolution,
            u_pointer,
        })
    }
}

impl Surface for GlSurface {
    fn resize(&mut self, size: OutputSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
    }

    fn present(&mut self, uniforms: &FrameUniforms) {
        let gl = &self.gl;
        gl.use_program(Some(&self.program));
        gl.uniform1f(Some(&self.u_time), uniforms.time);
        gl.uniform2f(
            Some(&self.u_resolution),
            uniforms.resolution.x,
            uniforms.resolution.y,
        );
        if let Some(u_pointer) = &self.u_pointer {
            gl.uniform2f(Some(u_pointer), uniforms.pointer.x, uniforms.pointer.y);
        }
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 6);
        gl.bind_vertex_array(None);
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, SiteError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SiteError::ShaderCompile("create_shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        Err(SiteError::ShaderCompile(
            gl.get_shader_info_log(&shader).unwrap_or_default(),
        ))
    }
}

fn link_program(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram, SiteError> {
    let program = gl
        .create_program()
        .ok_or_else(|| SiteError::ProgramLink("create_program".into()))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        Err(SiteError::ProgramLink(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}

/// Hook pointer and resize input, then start the frame loop.
pub fn start(window: &Window, site: &SharedSite) -> Result<(), JsValue> {
    let pointer_closure = {
        let site = site.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let viewport = dom::viewport(&window);
            site.borrow_mut().on_pointer_move(
                event.client_x() as f64,
                event.client_y() as f64,
                &viewport,
            );
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window
        .document()
        .ok_or("no document")?
        .add_event_listener_with_callback("mousemove", pointer_closure.as_ref().unchecked_ref())?;
    pointer_closure.forget();

    let resize_closure = {
        let site = site.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            site.borrow_mut().on_resize(&dom::viewport(&window));
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` from inside it. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself. Once the site reports the loop stopped, no
    // further frame is requested.
    let performance = window.performance().ok_or("no performance")?;
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    let site = site.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let clock = performance.now() * 0.001;
        if !site.borrow_mut().frame(clock) {
            log::info!("background loop stopped");
            return;
        }

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::warn!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }
    Ok(())
}
